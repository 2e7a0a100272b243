//! Core types and constructors for PaneStrip.

use std::collections::HashMap;

use fasemo_common::PaneId;
use fasemo_config::LayoutConfig;

use crate::pane::Pane;
use crate::separator::Separator;

/// Fixed strip geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripMetrics {
    /// Width of every separator in pixels.
    pub separator_width: f64,
    /// Floor applied to every pane width.
    pub min_pane_width: f64,
    /// Width given to newly added panes.
    pub default_pane_width: f64,
}

impl Default for StripMetrics {
    fn default() -> Self {
        Self {
            separator_width: 20.0,
            min_pane_width: 320.0,
            default_pane_width: 800.0,
        }
    }
}

impl From<&LayoutConfig> for StripMetrics {
    fn from(config: &LayoutConfig) -> Self {
        Self {
            separator_width: config.separator_width,
            min_pane_width: config.min_pane_width,
            default_pane_width: config.default_pane_width.max(config.min_pane_width),
        }
    }
}

/// The ordered pane/separator sequence.
///
/// `order` is the single source of truth for left-to-right position;
/// separator `k` is always bound to `order[k]`. Screen x-coordinates are
/// derived from it on demand and never stored.
#[derive(Debug, Clone)]
pub struct PaneStrip {
    pub(super) order: Vec<PaneId>,
    pub(super) panes: HashMap<PaneId, Pane>,
    pub(super) separators: Vec<Separator>,
    pub(super) metrics: StripMetrics,
    /// Next id to hand out. Ids are never reused.
    pub(super) next_id: u32,
}

impl PaneStrip {
    /// Create an empty strip with default metrics.
    pub fn new() -> Self {
        Self::with_metrics(StripMetrics::default())
    }

    pub fn with_metrics(metrics: StripMetrics) -> Self {
        Self {
            order: Vec::new(),
            panes: HashMap::new(),
            separators: Vec::new(),
            metrics,
            next_id: 1,
        }
    }

    // -- Accessors --

    pub fn metrics(&self) -> StripMetrics {
        self.metrics
    }

    pub fn separator_width(&self) -> f64 {
        self.metrics.separator_width
    }

    pub fn min_pane_width(&self) -> f64 {
        self.metrics.min_pane_width
    }

    pub fn pane_count(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Pane ids, left to right.
    pub fn order(&self) -> &[PaneId] {
        &self.order
    }

    pub fn contains(&self, id: PaneId) -> bool {
        self.panes.contains_key(&id)
    }

    pub fn pane(&self, id: PaneId) -> Option<&Pane> {
        self.panes.get(&id)
    }

    pub fn pane_mut(&mut self, id: PaneId) -> Option<&mut Pane> {
        self.panes.get_mut(&id)
    }

    /// Panes, left to right.
    pub fn panes(&self) -> impl Iterator<Item = &Pane> + '_ {
        self.order.iter().filter_map(|id| self.panes.get(id))
    }

    pub fn separators(&self) -> &[Separator] {
        &self.separators
    }

    pub fn separator(&self, id: PaneId) -> Option<&Separator> {
        self.index_of(id).map(|i| &self.separators[i])
    }

    pub fn index_of(&self, id: PaneId) -> Option<usize> {
        self.order.iter().position(|p| *p == id)
    }

    pub fn width_of(&self, id: PaneId) -> Option<f64> {
        self.panes.get(&id).map(|p| p.width)
    }

    /// Whether the order/separator bindings are consistent: same length,
    /// separator `k` bound to pane `k`, ids unique and all registered.
    pub fn is_consistent(&self) -> bool {
        self.order.len() == self.separators.len()
            && self.order.len() == self.panes.len()
            && self
                .order
                .iter()
                .zip(&self.separators)
                .all(|(id, sep)| sep.pane_id() == *id && self.panes.contains_key(id))
    }
}

impl Default for PaneStrip {
    fn default() -> Self {
        Self::new()
    }
}
