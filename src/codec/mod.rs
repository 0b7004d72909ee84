//! Canonical string codec for the icon pack tree
//!
//! The persisted wire format for nested pack configuration is a flat string:
//! a comma-separated list of path expressions, each a dot-separated sequence
//! of labels from the root down. `parse` merges the expressions into a single
//! tree; `encode` emits the minimal leaf-path form back out.

mod encode;
mod parse;

pub use encode::encode;
pub use parse::parse;

use crate::model::IconPack;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// In JSON the tree is represented as its canonical string, so it can live
// directly in a flat settings field.
impl Serialize for IconPack {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&encode(self))
    }
}

impl<'de> Deserialize<'de> for IconPack {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }
}
