//! HTTP handlers for the author resource.

pub mod author;
pub use author::*;
