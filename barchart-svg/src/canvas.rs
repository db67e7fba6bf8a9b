use barchart_common::types::Gradient;
use barchart_scenegraph::marks::group::SceneGroup;
use barchart_scenegraph::marks::mark::SceneMark;
use barchart_scenegraph::marks::rect::SceneRectMark;
use barchart_scenegraph::marks::rule::SceneRuleMark;
use barchart_scenegraph::marks::text::SceneTextMark;
use barchart_scenegraph::scene_graph::SceneGraph;

use crate::error::BarchartSvgError;

/// A drawing backend for scene graphs.
///
/// Backends implement the per-mark methods; scene traversal is shared. Marks receive the
/// absolute origin of their enclosing group.
pub trait Canvas {
    /// Removes everything drawn so far
    fn clear(&mut self);

    fn set_gradients(&mut self, gradients: &[Gradient]);

    fn add_rect_mark(
        &mut self,
        mark: &SceneRectMark,
        origin: [f32; 2],
    ) -> Result<(), BarchartSvgError>;

    fn add_rule_mark(
        &mut self,
        mark: &SceneRuleMark,
        origin: [f32; 2],
    ) -> Result<(), BarchartSvgError>;

    fn add_text_mark(
        &mut self,
        mark: &SceneTextMark,
        origin: [f32; 2],
    ) -> Result<(), BarchartSvgError>;

    fn add_mark(&mut self, mark: &SceneMark, origin: [f32; 2]) -> Result<(), BarchartSvgError> {
        match mark {
            SceneMark::Rect(mark) => {
                mark.validate()?;
                self.add_rect_mark(mark, origin)
            }
            SceneMark::Rule(mark) => {
                mark.validate()?;
                self.add_rule_mark(mark, origin)
            }
            SceneMark::Text(mark) => {
                mark.validate()?;
                self.add_text_mark(mark, origin)
            }
            SceneMark::Group(group) => self.add_group_mark(group, origin),
        }
    }

    fn add_group_mark(
        &mut self,
        group: &SceneGroup,
        parent_origin: [f32; 2],
    ) -> Result<(), BarchartSvgError> {
        let origin = [
            parent_origin[0] + group.origin[0],
            parent_origin[1] + group.origin[1],
        ];
        for mark_ind in group.draw_order() {
            self.add_mark(&group.marks[mark_ind], origin)?;
        }
        Ok(())
    }

    fn set_scene(&mut self, scene_graph: &SceneGraph) -> Result<(), BarchartSvgError> {
        self.clear();
        self.set_gradients(&scene_graph.gradients);

        // Sort top-level marks by zindex, keeping mount order for ties
        let mut indices: Vec<usize> = (0..scene_graph.marks.len()).collect();
        indices.sort_by_key(|i| scene_graph.marks[*i].zindex().unwrap_or(0));

        for mark_ind in indices {
            self.add_mark(&scene_graph.marks[mark_ind], scene_graph.origin)?;
        }
        Ok(())
    }
}
