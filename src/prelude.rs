//! Derive macros shared across the datestamp crate.

pub use derive_more::{Display, From, Into};
