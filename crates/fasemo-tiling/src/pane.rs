use fasemo_common::PaneId;
use serde::{Deserialize, Serialize};

use crate::content::ContentEvent;

/// Opaque icon handle supplied by the content collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Icon(pub String);

impl Icon {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

/// Load progress of a pane's content, driven only by collaborator events.
///
/// Within one load cycle the status only moves forward
/// (`Idle < Loading < LoadedNoIcon < LoadedWithIcon`); a new
/// `LoadStarted` always begins a fresh cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "icon")]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    LoadedWithIcon(Icon),
    LoadedNoIcon,
}

impl LoadStatus {
    /// The status after `event`, or `None` if the event leaves it unchanged.
    pub fn advance(&self, event: &ContentEvent) -> Option<LoadStatus> {
        match event {
            ContentEvent::LoadStarted => Some(LoadStatus::Loading),
            ContentEvent::IconChanged(Some(icon)) if !icon.is_empty() => match self {
                LoadStatus::LoadedWithIcon(current) if current == icon => None,
                _ => Some(LoadStatus::LoadedWithIcon(icon.clone())),
            },
            ContentEvent::IconChanged(_) => None,
            ContentEvent::LoadFinished { .. } => match self {
                LoadStatus::Idle | LoadStatus::Loading => Some(LoadStatus::LoadedNoIcon),
                LoadStatus::LoadedWithIcon(_) | LoadStatus::LoadedNoIcon => None,
            },
            ContentEvent::AddressChanged(_) => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }
}

/// One tile in the strip.
#[derive(Debug, Clone, Serialize)]
pub struct Pane {
    pub id: PaneId,
    /// Rendered width in pixels, never below the strip's floor.
    pub width: f64,
    /// Current navigable location.
    pub address: String,
    pub load_status: LoadStatus,
}

impl Pane {
    pub fn new(id: PaneId, address: impl Into<String>, width: f64) -> Self {
        Self {
            id,
            width,
            address: address.into(),
            load_status: LoadStatus::Idle,
        }
    }

    /// Fold a collaborator event into this pane. Returns `true` when the
    /// load status changed (the toolbar icon needs refreshing).
    pub fn apply(&mut self, event: &ContentEvent) -> bool {
        if let ContentEvent::AddressChanged(address) = event {
            self.address.clone_from(address);
        }
        match self.load_status.advance(event) {
            Some(next) => {
                self.load_status = next;
                true
            }
            None => false,
        }
    }
}
