pub mod app;
pub mod chart;
pub mod error;
pub mod render;
