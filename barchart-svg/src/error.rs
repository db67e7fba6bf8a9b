use barchart_scenegraph::error::BarchartSceneGraphError;

#[derive(Debug, thiserror::Error)]
pub enum BarchartSvgError {
    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Fill references gradient {0}, which is not defined by the scene graph")]
    GradientNotFound(u32),

    #[error("Cannot rasterize an image of size {0}x{1}")]
    InvalidImageSize(u32, u32),

    #[error("Invalid scene graph: {0}")]
    SceneGraphError(#[from] BarchartSceneGraphError),

    #[cfg(feature = "png")]
    #[error("usvg error: {0}")]
    UsvgError(#[from] usvg::Error),

    #[cfg(feature = "png")]
    #[error("roxml Error: {0}")]
    RoxmlError(#[from] usvg::roxmltree::Error),
}
