pub mod canvas;
pub mod error;
#[cfg(feature = "png")]
pub mod png;
pub mod svg;
