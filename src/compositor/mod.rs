//! Slide rasterization: background preparation, text layering and PNG
//! encoding on the fixed square surface.

pub mod blur;
pub mod composite;
pub(crate) mod surface;
