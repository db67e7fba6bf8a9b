use barchart_common::types::InvalidColorError;
use barchart_guides::error::BarchartGuidesError;
use barchart_scenegraph::error::BarchartSceneGraphError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum BarchartAppError {
    #[error("Invalid chart configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid bar fill: {0}")]
    InvalidFill(#[from] InvalidColorError),

    #[error("Axis error: {0}")]
    GuidesError(#[from] BarchartGuidesError),

    #[error("Scene graph error: {0}")]
    SceneGraphError(#[from] BarchartSceneGraphError),
}
