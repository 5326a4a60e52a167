//! Wait event types for NDJSON output

use serde::Serialize;

use crate::domain::{AccessRequest, WaitSourceKind};

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WaitEvent {
    WaitStarted {
        path: String,
        user: String,
        request: AccessRequest,
        strategy: WaitSourceKind,
    },
    Fallback {
        reason: String,
    },
    /// A wake-up from the source led to another evaluation
    Recheck {
        evaluations: u64,
        strategy: WaitSourceKind,
    },
    Satisfied {
        path: String,
        evaluations: u64,
        elapsed_ms: u64,
    },
    Error {
        message: String,
    },
}

impl WaitEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
