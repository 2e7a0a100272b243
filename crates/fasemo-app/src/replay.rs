//! Scripted interaction replay.
//!
//! A script is a JSON array of steps, each naming panes by their numeric
//! id. Steps that reference unknown panes degrade to no-ops the same way
//! live input does.

use std::path::Path;

use fasemo_common::PaneId;
use fasemo_tiling::{ContentEvent, ContentHost, StripManager};
use serde::Deserialize;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum ScriptStep {
    /// Add a pane; without an address the default is used.
    Add {
        #[serde(default)]
        address: Option<String>,
    },
    Close { pane: PaneId },
    /// Drag a pane by its handle across viewport x positions `over`, then
    /// drop it at `drop_x`. With `drop_x` unset the drag leaves the strip.
    Drag {
        pane: PaneId,
        #[serde(default)]
        over: Vec<f64>,
        #[serde(default)]
        drop_x: Option<f64>,
    },
    /// Set a width directly.
    Resize { pane: PaneId, width: f64 },
    /// Press at viewport `press_x`, move through `over`, release at
    /// `release_x`.
    Pointer {
        press_x: f64,
        #[serde(default)]
        over: Vec<f64>,
        release_x: f64,
    },
    Center { pane: PaneId },
    Grow { pane: PaneId },
    /// Type into a pane's address field and submit.
    Navigate { pane: PaneId, input: String },
    /// A lifecycle signal from a pane's content.
    Content { pane: PaneId, event: ContentEvent },
    Toolbar { slot: usize },
    Viewport { width: f64, height: f64 },
}

/// Read a script file.
pub fn load_script(path: &Path) -> fasemo_common::Result<Vec<ScriptStep>> {
    let text = std::fs::read_to_string(path)?;
    let steps = serde_json::from_str(&text)?;
    Ok(steps)
}

/// Outcome counts of one replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayReport {
    pub applied: usize,
    pub ignored: usize,
}

/// Feed every step to the manager in order.
pub fn run<H: ContentHost>(mgr: &mut StripManager<H>, steps: &[ScriptStep]) -> ReplayReport {
    let mut report = ReplayReport::default();
    for (n, step) in steps.iter().enumerate() {
        if apply(mgr, step) {
            report.applied += 1;
        } else {
            debug!(step = n, ?step, "step had no effect");
            report.ignored += 1;
        }
    }
    info!(
        applied = report.applied,
        ignored = report.ignored,
        "replay finished"
    );
    report
}

fn apply<H: ContentHost>(mgr: &mut StripManager<H>, step: &ScriptStep) -> bool {
    match step {
        ScriptStep::Add { address: Some(a) } => {
            mgr.add_pane(a.as_str());
            true
        }
        ScriptStep::Add { address: None } => {
            mgr.add_default_pane();
            true
        }
        ScriptStep::Close { pane } => mgr.close_pane(*pane),
        ScriptStep::Drag { pane, over, drop_x } => {
            let Some(payload) = mgr.begin_drag(*pane) else {
                return false;
            };
            for x in over {
                mgr.drag_moved(&payload, *x);
            }
            match drop_x {
                Some(x) => mgr.drop(&payload, *x),
                None => {
                    mgr.drag_left();
                    false
                }
            }
        }
        ScriptStep::Resize { pane, width } => mgr.resize_pane(*pane, *width),
        ScriptStep::Pointer {
            press_x,
            over,
            release_x,
        } => {
            mgr.pointer_pressed(*press_x);
            for x in over {
                mgr.pointer_moved(*x);
            }
            mgr.pointer_released(*release_x)
        }
        ScriptStep::Center { pane } => mgr.center(*pane),
        ScriptStep::Grow { pane } => mgr.grow(*pane),
        ScriptStep::Navigate { pane, input } => mgr.submit_address(*pane, input),
        ScriptStep::Content { pane, event } => {
            let known = mgr.pane(*pane).is_some();
            mgr.handle_content_event(*pane, event);
            known
        }
        ScriptStep::Toolbar { slot } => mgr.activate_toolbar(*slot),
        ScriptStep::Viewport { width, height } => {
            mgr.set_viewport(*width, *height);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fasemo_common::FasemoError;
    use fasemo_config::FasemoConfig;
    use fasemo_tiling::{LoadStatus, NoopContentHost, ToolbarIcon};

    fn manager() -> StripManager {
        let mut config = FasemoConfig::default();
        config.layout.default_pane_width = 400.0;
        let mut mgr = StripManager::from_config(&config, NoopContentHost);
        mgr.set_viewport(1000.0, 600.0);
        mgr
    }

    fn parse(json: &str) -> Vec<ScriptStep> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn parses_every_step_kind() {
        let steps = parse(
            r#"[
                {"step": "add"},
                {"step": "add", "address": "https://docs.rs"},
                {"step": "close", "pane": 1},
                {"step": "drag", "pane": 2, "over": [10, 20], "drop_x": 30},
                {"step": "resize", "pane": 2, "width": 500},
                {"step": "pointer", "press_x": 410, "release_x": 500},
                {"step": "center", "pane": 2},
                {"step": "grow", "pane": 2},
                {"step": "navigate", "pane": 2, "input": "example.com"},
                {"step": "content", "pane": 2, "event": {"kind": "load_started"}},
                {"step": "toolbar", "slot": 0},
                {"step": "viewport", "width": 800, "height": 600}
            ]"#,
        );
        assert_eq!(steps.len(), 12);
        assert_eq!(steps[0], ScriptStep::Add { address: None });
        assert_eq!(
            steps[3],
            ScriptStep::Drag {
                pane: PaneId(2),
                over: vec![10.0, 20.0],
                drop_x: Some(30.0)
            }
        );
    }

    #[test]
    fn drag_script_reorders_and_syncs_toolbar() {
        let mut mgr = manager();
        let steps = parse(
            r#"[
                {"step": "add", "address": "https://a.example"},
                {"step": "add", "address": "https://b.example"},
                {"step": "add", "address": "https://c.example"},
                {"step": "drag", "pane": 1, "over": [300, 900], "drop_x": 1100}
            ]"#,
        );
        let report = run(&mut mgr, &steps);
        assert_eq!(report, ReplayReport { applied: 4, ignored: 0 });
        let order = vec![PaneId(2), PaneId(3), PaneId(1)];
        assert_eq!(mgr.order(), order.as_slice());
        assert_eq!(mgr.toolbar().pane_ids(), order);
    }

    #[test]
    fn cancelled_drag_and_unknown_panes_are_ignored() {
        let mut mgr = manager();
        let steps = parse(
            r#"[
                {"step": "add"},
                {"step": "drag", "pane": 1, "over": [100]},
                {"step": "close", "pane": 7},
                {"step": "content", "pane": 7, "event": {"kind": "load_started"}}
            ]"#,
        );
        let report = run(&mut mgr, &steps);
        assert_eq!(report, ReplayReport { applied: 1, ignored: 3 });
        assert!(!mgr.indicator().visible);
    }

    #[test]
    fn content_events_drive_toolbar_icon() {
        let mut mgr = manager();
        let steps = parse(
            r#"[
                {"step": "add"},
                {"step": "content", "pane": 1, "event": {"kind": "load_started"}},
                {"step": "content", "pane": 1, "event": {"kind": "load_finished", "value": {"success": true}}}
            ]"#,
        );
        run(&mut mgr, &steps);
        assert_eq!(
            mgr.pane(PaneId(1)).unwrap().load_status,
            LoadStatus::LoadedNoIcon
        );
        assert_eq!(
            mgr.toolbar().entry(PaneId(1)).unwrap().icon,
            ToolbarIcon::Fallback
        );
    }

    #[test]
    fn pointer_script_resizes() {
        let mut mgr = manager();
        let steps = parse(
            r#"[
                {"step": "add"},
                {"step": "pointer", "press_x": 410, "over": [460], "release_x": 610}
            ]"#,
        );
        run(&mut mgr, &steps);
        assert!((mgr.pane(PaneId(1)).unwrap().width - 600.0).abs() < 0.01);
    }

    #[test]
    fn load_script_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("steps.json");
        std::fs::write(&path, "[{\"step\": \"teleport\"}]").unwrap();
        assert!(matches!(load_script(&path), Err(FasemoError::Json(_))));

        let missing = dir.path().join("missing.json");
        assert!(matches!(load_script(&missing), Err(FasemoError::Io(_))));
    }
}
