//! JSONL event scripts.
//!
//! One JSON object per line, tagged by `type`:
//!
//! ```text
//! {"type":"next"}
//! {"type":"prev"}
//! {"type":"goto","index":3}
//! {"type":"drag","dx":-200,"dy":0,"pointer":1,"steps":4}
//! {"type":"frames","count":30}
//! {"type":"trigger","role":"next"}
//! {"type":"items","count":7}
//! {"type":"controlled","index":2}
//! {"type":"drag_enabled","enabled":false}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use carousel3d::TriggerRole;
use serde::Deserialize;

const DEFAULT_DRAG_STEPS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    Next,
    Prev,
    Goto {
        index: i64,
    },
    /// A whole gesture: start, `steps` evenly spaced moves, release.
    Drag {
        #[serde(default)]
        dx: f64,
        #[serde(default)]
        dy: f64,
        #[serde(default)]
        pointer: Option<i32>,
        #[serde(default = "default_steps")]
        steps: usize,
    },
    Frames {
        count: usize,
    },
    Trigger {
        role: TriggerRole,
    },
    Items {
        count: usize,
    },
    /// `null` index hands ownership back to the carousel.
    Controlled {
        index: Option<usize>,
    },
    DragEnabled {
        enabled: bool,
    },
}

fn default_steps() -> usize {
    DEFAULT_DRAG_STEPS
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Prev => "prev",
            Self::Goto { .. } => "goto",
            Self::Drag { .. } => "drag",
            Self::Frames { .. } => "frames",
            Self::Trigger { .. } => "trigger",
            Self::Items { .. } => "items",
            Self::Controlled { .. } => "controlled",
            Self::DragEnabled { .. } => "drag_enabled",
        }
    }
}

/// Parse one script line. `Ok(None)` for blank and comment lines.
pub fn parse_event_line(line: &str) -> Result<Option<Event>, serde_json::Error> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(trimmed).map(Some)
}
