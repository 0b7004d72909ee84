//! Core data model for iconpack

mod pack;

pub use pack::IconPack;
