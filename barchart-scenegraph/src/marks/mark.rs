use std::sync::Arc;

use crate::error::BarchartSceneGraphError;
use crate::marks::group::SceneGroup;
use crate::marks::rect::SceneRectMark;
use crate::marks::rule::SceneRuleMark;
use crate::marks::text::SceneTextMark;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneMark {
    Rect(SceneRectMark),
    Rule(SceneRuleMark),
    Text(Arc<SceneTextMark>),
    Group(SceneGroup),
}

impl SceneMark {
    pub fn name(&self) -> &str {
        match self {
            Self::Rect(mark) => &mark.name,
            Self::Rule(mark) => &mark.name,
            Self::Text(mark) => &mark.name,
            Self::Group(mark) => &mark.name,
        }
    }

    pub fn zindex(&self) -> Option<i32> {
        match self {
            Self::Rect(mark) => mark.zindex,
            Self::Rule(mark) => mark.zindex,
            Self::Text(mark) => mark.zindex,
            Self::Group(mark) => mark.zindex,
        }
    }

    pub fn children(&self) -> &[SceneMark] {
        match self {
            Self::Group(group) => &group.marks,
            _ => &[],
        }
    }

    /// Number of drawable instances in this mark, recursing into groups
    pub fn instance_count(&self) -> usize {
        match self {
            Self::Rect(mark) => mark.instance_count(),
            Self::Rule(mark) => mark.instance_count(),
            Self::Text(mark) => mark.instance_count(),
            Self::Group(group) => group.instance_count(),
        }
    }
}

pub(crate) fn check_channel_len(
    name: &str,
    channel: &'static str,
    actual: Option<usize>,
    expected: usize,
) -> Result<(), BarchartSceneGraphError> {
    match actual {
        Some(actual) if actual != expected => Err(BarchartSceneGraphError::ChannelLengthMismatch {
            name: name.to_string(),
            channel,
            expected,
            actual,
        }),
        _ => Ok(()),
    }
}

pub(crate) fn check_indices(
    name: &str,
    indices: Option<&Vec<usize>>,
    len: usize,
) -> Result<(), BarchartSceneGraphError> {
    match indices.and_then(|indices| indices.iter().find(|index| **index >= len)) {
        Some(index) => Err(BarchartSceneGraphError::IndexOutOfBounds {
            name: name.to_string(),
            index: *index,
            len,
        }),
        None => Ok(()),
    }
}
