//! Core types and constructors for StripManager.

use fasemo_common::{EventBus, PaneId, SessionId};
use fasemo_config::FasemoConfig;

use crate::content::{ContentHost, NoopContentHost};
use crate::pane::Pane;
use crate::reorder::{InsertionIndicator, ReorderController};
use crate::scroll::ScrollCoordinator;
use crate::strip::{PaneStrip, StripMetrics};
use crate::toolbar::ToolbarMirror;

/// Coordinates the strip, drag-reorder, resize, scroll and toolbar for one
/// window. All mutations run synchronously on the caller's thread; the
/// toolbar is re-derived from the strip order after every structural
/// change and the scroll offset is re-clamped whenever content shrinks.
pub struct StripManager<H: ContentHost = NoopContentHost> {
    pub(super) strip: PaneStrip,
    pub(super) reorder: ReorderController,
    pub(super) scroll: ScrollCoordinator,
    pub(super) toolbar: ToolbarMirror,
    /// Content collaborator receiving open/navigate/close commands.
    pub(super) host: H,
    pub(super) events: EventBus,
    /// Address opened by the pinned add control.
    pub(super) default_address: String,
    /// Scheme prefixed to typed addresses that lack one.
    pub(super) default_scheme: String,
    pub(super) indicator_width: f64,
}

impl<H: ContentHost> StripManager<H> {
    /// Create an empty manager with default metrics and a zero viewport.
    pub fn new(host: H) -> Self {
        Self::from_config(&FasemoConfig::default(), host)
    }

    /// Create an empty manager using the layout and startup settings.
    /// Initial panes are not opened; see [`StripManager::open_initial`].
    pub fn from_config(config: &FasemoConfig, host: H) -> Self {
        Self {
            strip: PaneStrip::with_metrics(StripMetrics::from(&config.layout)),
            reorder: ReorderController::new(SessionId::new()),
            scroll: ScrollCoordinator::default(),
            toolbar: ToolbarMirror::from(&config.toolbar),
            host,
            events: EventBus::default(),
            default_address: config.startup.default_address.clone(),
            default_scheme: config.startup.default_scheme.clone(),
            indicator_width: config.layout.indicator_width,
        }
    }

    // -- Accessors --

    pub fn strip(&self) -> &PaneStrip {
        &self.strip
    }

    pub fn order(&self) -> &[PaneId] {
        self.strip.order()
    }

    pub fn pane(&self, id: PaneId) -> Option<&Pane> {
        self.strip.pane(id)
    }

    pub fn pane_count(&self) -> usize {
        self.strip.pane_count()
    }

    pub fn scroll(&self) -> &ScrollCoordinator {
        &self.scroll
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll.offset()
    }

    pub fn toolbar(&self) -> &ToolbarMirror {
        &self.toolbar
    }

    pub fn indicator(&self) -> InsertionIndicator {
        self.reorder.indicator(&self.strip)
    }

    pub fn session(&self) -> &SessionId {
        self.reorder.session()
    }

    pub fn default_address(&self) -> &str {
        &self.default_address
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }
}

impl Default for StripManager<NoopContentHost> {
    fn default() -> Self {
        Self::new(NoopContentHost)
    }
}
