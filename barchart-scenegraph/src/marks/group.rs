use super::mark::SceneMark;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneGroup {
    pub name: String,
    pub origin: [f32; 2],
    pub marks: Vec<SceneMark>,
    pub zindex: Option<i32>,
}

impl SceneGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_origin(mut self, origin: [f32; 2]) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_marks(mut self, marks: Vec<SceneMark>) -> Self {
        self.marks = marks;
        self
    }

    pub fn push(&mut self, mark: impl Into<SceneMark>) {
        self.marks.push(mark.into());
    }

    /// Indices of `marks` in drawing order: ascending zindex, stable for ties
    pub fn draw_order(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.marks.len()).collect();
        indices.sort_by_key(|i| self.marks[*i].zindex().unwrap_or(0));
        indices
    }

    pub fn instance_count(&self) -> usize {
        self.marks.iter().map(|m| m.instance_count()).sum()
    }

    /// Returns the first direct child mark with the given name
    pub fn find(&self, name: &str) -> Option<&SceneMark> {
        self.marks.iter().find(|m| m.name() == name)
    }

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
}

impl Default for SceneGroup {
    fn default() -> Self {
        Self {
            name: "".to_string(),
            origin: [0.0, 0.0],
            marks: vec![],
            zindex: None,
        }
    }
}

impl From<SceneGroup> for SceneMark {
    fn from(mark: SceneGroup) -> Self {
        SceneMark::Group(mark)
    }
}
