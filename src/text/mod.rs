pub mod fonts;
pub mod wrap;
