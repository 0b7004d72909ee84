//! # iconpack
//!
//! The hierarchical namespace model behind generated icon accessor code.
//!
//! An icon pack is a tree of nested namespaces that groups generated
//! accessor declarations. The tree has one persisted wire format, a compact
//! comma/dot path-expression string, and one display format, an indented
//! box-drawing diagram. Both are deterministic, pure functions over the
//! tree, so the same configuration string produces the same layout
//! regardless of which host (build tool or IDE) supplied it.
//!
//! ## Example
//!
//! ```
//! use iconpack::IconPack;
//!
//! let pack: IconPack = "Icons.Filled,Icons.Outlined.Small".parse()?;
//! assert_eq!(pack.to_raw_string(), "Icons.Filled,Icons.Outlined.Small");
//! assert_eq!(pack.leaf_count(), 2);
//! # Ok::<(), iconpack::Error>(())
//! ```

pub mod codec;
pub mod config;
pub mod model;
pub mod render;

mod error;

pub use codec::{encode, parse};
pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use model::IconPack;
