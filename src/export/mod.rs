//! Download packaging: single-slide PNGs and the multi-slide zip archive.

pub mod packager;
