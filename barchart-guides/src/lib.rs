pub mod axis;
pub mod error;
