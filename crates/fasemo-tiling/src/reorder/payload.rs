//! Drag payload carrying a pane id, scoped to one session.

use fasemo_common::{PaneId, PayloadError, SessionId};
use serde::{Deserialize, Serialize};

/// Format tag that marks a drag as a pane reorder.
pub const PANE_DRAG_MIME: &str = "application/x-fasemo-pane";

/// What travels with a drag gesture: a format tag plus an opaque body.
///
/// The body is `"<session>:<pane id>"`. Drop targets accept only payloads
/// with the pane tag and their own session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    pub mime: String,
    pub data: String,
}

impl DragPayload {
    pub fn for_pane(session: &SessionId, id: PaneId) -> Self {
        Self {
            mime: PANE_DRAG_MIME.to_string(),
            data: format!("{}:{}", session, id.0),
        }
    }

    /// A payload from some other drag source.
    pub fn foreign(mime: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime: mime.into(),
            data: data.into(),
        }
    }

    pub fn has_pane_tag(&self) -> bool {
        self.mime == PANE_DRAG_MIME
    }

    /// Extract the pane id if this payload was produced by `session`.
    pub fn decode(&self, session: &SessionId) -> Result<PaneId, PayloadError> {
        if !self.has_pane_tag() {
            return Err(PayloadError::MissingTag);
        }
        let (owner, raw_id) = self
            .data
            .rsplit_once(':')
            .ok_or_else(|| PayloadError::MalformedId(self.data.clone()))?;
        if owner != session.as_str() {
            return Err(PayloadError::ForeignSession(owner.to_string()));
        }
        raw_id
            .parse()
            .map_err(|_| PayloadError::MalformedId(raw_id.to_string()))
    }
}
