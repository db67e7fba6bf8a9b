use std::collections::HashMap;

use crate::error::BarchartSceneGraphError;
use crate::marks::{group::SceneGroup, mark::SceneMark};
use barchart_common::types::Gradient;
use serde::{Deserialize, Serialize};

/// Root of a drawable scene.
///
/// Top-level groups double as mount points: a renderer declares them up front and then
/// replaces their contents on every redraw with [`SceneGraph::mount`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneGraph {
    pub marks: Vec<SceneMark>,
    pub width: f32,
    pub height: f32,
    pub origin: [f32; 2],
    /// Gradients referenced by `ColorOrGradient::GradientIndex`
    pub gradients: Vec<Gradient>,
}

impl SceneGraph {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            marks: vec![],
            width,
            height,
            origin: [0.0, 0.0],
            gradients: vec![],
        }
    }

    /// Declares one empty top-level group per name, in drawing order
    pub fn with_mount_points(mut self, names: &[&str]) -> Self {
        for name in names {
            self.marks.push(SceneGroup::new(*name).into());
        }
        self
    }

    pub fn with_gradients(mut self, gradients: Vec<Gradient>) -> Self {
        self.gradients = gradients;
        self
    }

    /// Replaces the contents of the mount point named `name` with `group`.
    ///
    /// The mount point keeps its name and position among the top-level marks, so
    /// mounting the same group twice leaves the scene unchanged.
    pub fn mount(
        &mut self,
        name: &str,
        mut group: SceneGroup,
    ) -> Result<(), BarchartSceneGraphError> {
        let slot = self
            .marks
            .iter_mut()
            .find(|m| matches!(m, SceneMark::Group(g) if g.name == name))
            .ok_or_else(|| BarchartSceneGraphError::MountPointNotFound(name.to_string()))?;

        group.name = name.to_string();
        *slot = SceneMark::Group(group);
        Ok(())
    }

    /// Returns the top-level group named `name`
    pub fn group(&self, name: &str) -> Option<&SceneGroup> {
        self.groups().into_iter().find(|g| g.name == name)
    }

    pub fn groups(&self) -> Vec<&SceneGroup> {
        self.marks
            .iter()
            .filter_map(|m| {
                let SceneMark::Group(g) = m else {
                    return None;
                };
                Some(g)
            })
            .collect()
    }

    pub fn children(&self) -> &[SceneMark] {
        &self.marks
    }

    pub fn get_mark(&self, mark_path: &[usize]) -> Option<&SceneMark> {
        // empty path is the root, which is not a mark
        let (first, rest) = mark_path.split_first()?;
        let mut child = self.marks.get(*first)?;
        for index in rest {
            child = child.children().get(*index)?;
        }
        Some(child)
    }

    /// Returns the absolute origin of the group at `group_path`
    pub fn get_absolute_origin(&self, group_path: &[usize]) -> Option<[f32; 2]> {
        let mut origin = self.origin;
        let mut marks = self.marks.as_slice();
        for index in group_path {
            let SceneMark::Group(group) = marks.get(*index)? else {
                return None;
            };
            origin = [origin[0] + group.origin[0], origin[1] + group.origin[1]];
            marks = &group.marks;
        }
        Some(origin)
    }

    /// Returns all of the group paths in the scene graph
    pub fn group_paths(&self) -> Vec<Vec<usize>> {
        let mut paths = vec![];
        for (index, mark) in self.marks.iter().enumerate() {
            let SceneMark::Group(group) = mark else {
                continue;
            };
            paths.push(vec![index]);
            for sub_path in group.group_paths() {
                let mut path = vec![index];
                path.extend(sub_path);
                paths.push(path);
            }
        }
        paths
    }

    /// Returns mapping from the names of each named group to their path
    pub fn group_names(&self) -> HashMap<String, Vec<usize>> {
        let mut names = HashMap::new();
        for path in self.group_paths() {
            if let Some(SceneMark::Group(group)) = self.get_mark(&path) {
                if !group.name.is_empty() {
                    names.insert(group.name.clone(), path);
                }
            }
        }
        names
    }

    /// Total number of drawable instances across all marks
    pub fn instance_count(&self) -> usize {
        self.marks.iter().map(|m| m.instance_count()).sum()
    }
}
