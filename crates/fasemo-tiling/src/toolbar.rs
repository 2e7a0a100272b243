//! Shortcut toolbar kept in 1:1 order with the strip.
//!
//! Slot 0 is the pinned add control; slot `k` is the shortcut for the
//! pane at strip index `k - 1`. Entries are rebuilt from the strip order
//! after every structural change rather than patched in place.

use std::collections::HashMap;

use fasemo_common::PaneId;
use fasemo_config::ToolbarConfig;
use serde::Serialize;
use tracing::trace;

use crate::pane::{Icon, LoadStatus, Pane};

/// What a pane shortcut displays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "icon", content = "handle", rename_all = "snake_case")]
pub enum ToolbarIcon {
    /// Nothing loaded yet.
    #[default]
    Blank,
    Loading,
    Favicon(Icon),
    /// Load finished without a page icon.
    Fallback,
}

impl ToolbarIcon {
    /// Icon for a load status. `Idle` has none of its own; the entry
    /// keeps whatever it showed before.
    pub fn for_status(status: &LoadStatus) -> Option<ToolbarIcon> {
        match status {
            LoadStatus::Idle => None,
            LoadStatus::Loading => Some(ToolbarIcon::Loading),
            LoadStatus::LoadedWithIcon(icon) => Some(ToolbarIcon::Favicon(icon.clone())),
            LoadStatus::LoadedNoIcon => Some(ToolbarIcon::Fallback),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolbarEntry {
    pub pane_id: PaneId,
    pub icon: ToolbarIcon,
}

/// Command produced by activating a toolbar slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    AddPane,
    Center(PaneId),
}

/// One rendered toolbar slot with its icon edge length in pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "slot", rename_all = "snake_case")]
pub enum ToolbarSlot {
    AddPane {
        size: u32,
    },
    Pane {
        #[serde(flatten)]
        entry: ToolbarEntry,
        size: u32,
    },
}

#[derive(Debug, Clone)]
pub struct ToolbarMirror {
    entries: Vec<ToolbarEntry>,
    /// Add control and status icons.
    icon_size: u32,
    /// Page icons once a pane has one.
    pane_icon_size: u32,
}

impl Default for ToolbarMirror {
    fn default() -> Self {
        Self::from(&ToolbarConfig::default())
    }
}

impl From<&ToolbarConfig> for ToolbarMirror {
    fn from(config: &ToolbarConfig) -> Self {
        Self {
            entries: Vec::new(),
            icon_size: config.icon_size,
            pane_icon_size: config.pane_icon_size,
        }
    }
}

impl ToolbarMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edge length an icon is drawn at.
    pub fn size_for(&self, icon: &ToolbarIcon) -> u32 {
        match icon {
            ToolbarIcon::Favicon(_) => self.pane_icon_size,
            _ => self.icon_size,
        }
    }

    /// Rebuild every pane entry from `panes`, in their order. Icons are
    /// derived from each pane's load status.
    pub fn resync<'a>(&mut self, panes: impl IntoIterator<Item = &'a Pane>) {
        let mut previous: HashMap<PaneId, ToolbarIcon> = self
            .entries
            .drain(..)
            .map(|e| (e.pane_id, e.icon))
            .collect();
        self.entries = panes
            .into_iter()
            .map(|pane| ToolbarEntry {
                pane_id: pane.id,
                icon: ToolbarIcon::for_status(&pane.load_status)
                    .or_else(|| previous.remove(&pane.id))
                    .unwrap_or_default(),
            })
            .collect();
        trace!(entries = self.entries.len(), "toolbar resynced");
    }

    /// Refresh one entry's icon after its pane's status changed.
    pub fn update_icon(&mut self, pane_id: PaneId, status: &LoadStatus) -> bool {
        let Some(icon) = ToolbarIcon::for_status(status) else {
            return false;
        };
        match self.entries.iter_mut().find(|e| e.pane_id == pane_id) {
            Some(entry) if entry.icon != icon => {
                entry.icon = icon;
                true
            }
            _ => false,
        }
    }

    pub fn entries(&self) -> &[ToolbarEntry] {
        &self.entries
    }

    pub fn entry(&self, pane_id: PaneId) -> Option<&ToolbarEntry> {
        self.entries.iter().find(|e| e.pane_id == pane_id)
    }

    /// Pane ids in toolbar order.
    pub fn pane_ids(&self) -> Vec<PaneId> {
        self.entries.iter().map(|e| e.pane_id).collect()
    }

    /// Number of slots including the add control.
    pub fn slot_count(&self) -> usize {
        self.entries.len() + 1
    }

    pub fn slots(&self) -> Vec<ToolbarSlot> {
        let panes = self.entries.iter().map(|entry| ToolbarSlot::Pane {
            size: self.size_for(&entry.icon),
            entry: entry.clone(),
        });
        std::iter::once(ToolbarSlot::AddPane {
            size: self.icon_size,
        })
        .chain(panes)
        .collect()
    }

    pub fn action_at(&self, slot: usize) -> Option<ToolbarAction> {
        match slot {
            0 => Some(ToolbarAction::AddPane),
            n => self
                .entries
                .get(n - 1)
                .map(|e| ToolbarAction::Center(e.pane_id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentEvent;

    fn panes(n: u32) -> Vec<Pane> {
        (1..=n)
            .map(|i| Pane::new(PaneId(i), "about:blank", 400.0))
            .collect()
    }

    #[test]
    fn resync_matches_order() {
        let mut toolbar = ToolbarMirror::new();
        let mut ps = panes(3);
        toolbar.resync(&ps);
        assert_eq!(toolbar.pane_ids(), vec![PaneId(1), PaneId(2), PaneId(3)]);

        ps.swap(0, 2);
        toolbar.resync(&ps);
        assert_eq!(toolbar.pane_ids(), vec![PaneId(3), PaneId(2), PaneId(1)]);

        ps.remove(1);
        toolbar.resync(&ps);
        assert_eq!(toolbar.pane_ids(), vec![PaneId(3), PaneId(1)]);
        assert_eq!(toolbar.slot_count(), 3);
    }

    #[test]
    fn add_control_is_pinned_first() {
        let mut toolbar = ToolbarMirror::new();
        assert_eq!(toolbar.slots(), vec![ToolbarSlot::AddPane { size: 48 }]);
        toolbar.resync(&panes(2));
        let slots = toolbar.slots();
        assert_eq!(slots[0], ToolbarSlot::AddPane { size: 48 });
        assert!(matches!(&slots[2], ToolbarSlot::Pane { entry, .. } if entry.pane_id == PaneId(2)));
    }

    #[test]
    fn actions_map_slots() {
        let mut toolbar = ToolbarMirror::new();
        toolbar.resync(&panes(2));
        assert_eq!(toolbar.action_at(0), Some(ToolbarAction::AddPane));
        assert_eq!(toolbar.action_at(1), Some(ToolbarAction::Center(PaneId(1))));
        assert_eq!(toolbar.action_at(2), Some(ToolbarAction::Center(PaneId(2))));
        assert_eq!(toolbar.action_at(3), None);
    }

    #[test]
    fn icons_follow_load_status() {
        let mut toolbar = ToolbarMirror::new();
        let mut ps = panes(1);
        toolbar.resync(&ps);
        assert_eq!(toolbar.entry(PaneId(1)).unwrap().icon, ToolbarIcon::Blank);

        ps[0].apply(&ContentEvent::LoadStarted);
        assert!(toolbar.update_icon(PaneId(1), &ps[0].load_status));
        assert_eq!(toolbar.entry(PaneId(1)).unwrap().icon, ToolbarIcon::Loading);

        ps[0].apply(&ContentEvent::LoadFinished { success: true });
        assert!(toolbar.update_icon(PaneId(1), &ps[0].load_status));
        assert_eq!(toolbar.entry(PaneId(1)).unwrap().icon, ToolbarIcon::Fallback);

        ps[0].apply(&ContentEvent::IconChanged(Some(Icon::new("fav.png"))));
        toolbar.update_icon(PaneId(1), &ps[0].load_status);
        assert_eq!(
            toolbar.entry(PaneId(1)).unwrap().icon,
            ToolbarIcon::Favicon(Icon::new("fav.png"))
        );
    }

    #[test]
    fn idle_status_does_not_change_icon() {
        let mut toolbar = ToolbarMirror::new();
        toolbar.resync(&panes(1));
        assert!(!toolbar.update_icon(PaneId(1), &LoadStatus::Idle));
    }

    #[test]
    fn update_unknown_entry_is_noop() {
        let mut toolbar = ToolbarMirror::new();
        assert!(!toolbar.update_icon(PaneId(5), &LoadStatus::Loading));
    }

    #[test]
    fn resync_keeps_icons() {
        let mut toolbar = ToolbarMirror::new();
        let mut ps = panes(2);
        ps[1].apply(&ContentEvent::IconChanged(Some(Icon::new("b.ico"))));
        toolbar.resync(&ps);
        ps.swap(0, 1);
        toolbar.resync(&ps);
        assert_eq!(
            toolbar.entries()[0],
            ToolbarEntry {
                pane_id: PaneId(2),
                icon: ToolbarIcon::Favicon(Icon::new("b.ico")),
            }
        );
        assert_eq!(toolbar.entries()[1].icon, ToolbarIcon::Blank);
    }

    #[test]
    fn slot_sizes_come_from_config() {
        let config = ToolbarConfig {
            icon_size: 32,
            pane_icon_size: 24,
        };
        let mut toolbar = ToolbarMirror::from(&config);
        let mut ps = panes(2);
        ps[1].apply(&ContentEvent::IconChanged(Some(Icon::new("b.ico"))));
        toolbar.resync(&ps);

        let slots = toolbar.slots();
        assert_eq!(slots[0], ToolbarSlot::AddPane { size: 32 });
        assert!(matches!(&slots[1], ToolbarSlot::Pane { size: 32, .. }));
        assert!(matches!(&slots[2], ToolbarSlot::Pane { size: 24, .. }));
    }
}
