use barchart_scenegraph::error::BarchartSceneGraphError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum BarchartGuidesError {
    #[error("Invalid axis configuration: {0}")]
    InvalidAxisConfig(String),

    #[error("Invalid axis marks: {0}")]
    InvalidMarks(#[from] BarchartSceneGraphError),
}
