use std::sync::Arc;

use barchart_scenegraph::scene_graph::SceneGraph;

use crate::chart::{derive_bars, BarGeometry, ChartConfig, ChartScales, Datum};
use crate::error::BarchartAppError;
use crate::render::{make_surface, render_chart};

/// Receives the scene graph after every redraw
pub trait ChartObserver {
    fn on_redraw(&self, scene_graph: &Arc<SceneGraph>);
}

impl<F> ChartObserver for F
where
    F: Fn(&Arc<SceneGraph>),
{
    fn on_redraw(&self, scene_graph: &Arc<SceneGraph>) {
        self(scene_graph)
    }
}

/// Owns the chart inputs and the scene graph they are drawn into.
///
/// Every setter recomputes scales and geometry from scratch and redraws all mount points
/// once before notifying observers.
pub struct BarChartApp {
    data: Vec<Datum>,
    config: ChartConfig,
    scales: ChartScales,
    bars: Vec<BarGeometry>,
    scene_graph: Arc<SceneGraph>,
    observers: Vec<Box<dyn ChartObserver>>,
}

impl BarChartApp {
    pub fn new(data: Vec<Datum>, config: ChartConfig) -> Result<Self, BarchartAppError> {
        config.validate()?;
        let scales = ChartScales::from_data(&data, &config);
        let bars = derive_bars(&data, &scales);
        let mut scene_graph = make_surface(&config)?;
        render_chart(&scales, &bars, &config, &mut scene_graph)?;

        Ok(Self {
            data,
            config,
            scales,
            bars,
            scene_graph: Arc::new(scene_graph),
            observers: vec![],
        })
    }

    pub fn set_data(&mut self, data: Vec<Datum>) -> Result<(), BarchartAppError> {
        self.update(data, self.config.clone())
    }

    /// Replaces the configuration. An invalid configuration is rejected and the previous
    /// one kept.
    pub fn set_config(&mut self, config: ChartConfig) -> Result<(), BarchartAppError> {
        config.validate()?;
        self.update(self.data.clone(), config)
    }

    pub fn set_dimensions(
        &mut self,
        width: f32,
        height: f32,
        margin: f32,
    ) -> Result<(), BarchartAppError> {
        self.set_config(self.config.clone().with_dimensions(width, height, margin))
    }

    pub fn subscribe(&mut self, observer: impl ChartObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn data(&self) -> &[Datum] {
        &self.data
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn scales(&self) -> &ChartScales {
        &self.scales
    }

    pub fn bars(&self) -> &[BarGeometry] {
        &self.bars
    }

    pub fn scene_graph(&self) -> Arc<SceneGraph> {
        self.scene_graph.clone()
    }

    /// Redraws from `data` and `config`. Nothing is replaced unless the redraw succeeds.
    fn update(&mut self, data: Vec<Datum>, config: ChartConfig) -> Result<(), BarchartAppError> {
        let scales = ChartScales::from_data(&data, &config);
        let bars = derive_bars(&data, &scales);
        log::debug!("recomputed {} bars from {} records", bars.len(), data.len());

        let mut scene_graph = SceneGraph::clone(&self.scene_graph);
        render_chart(&scales, &bars, &config, &mut scene_graph)?;

        self.data = data;
        self.config = config;
        self.scales = scales;
        self.bars = bars;
        self.scene_graph = Arc::new(scene_graph);

        for observer in &self.observers {
            observer.on_redraw(&self.scene_graph);
        }
        Ok(())
    }
}
