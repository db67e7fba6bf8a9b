use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum BarchartSceneGraphError {
    #[error("No mount point named `{0}` in scene graph")]
    MountPointNotFound(String),

    #[error("Mark `{name}` has {actual} values for `{channel}`, expected {expected}")]
    ChannelLengthMismatch {
        name: String,
        channel: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Mark `{name}` selects instance {index}, but only has {len}")]
    IndexOutOfBounds {
        name: String,
        index: usize,
        len: usize,
    },
}
