//! Content generation seam: provider trait, wire types and the tone,
//! palette and visual-style catalogs.

pub mod catalog;
pub mod provider;
