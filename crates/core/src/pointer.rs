//! Version pointer state machine.
//!
//! Every document carries a triple `(head, current, max_reachable)` over its
//! version log: `head` is the highest version ever written, `current` is the
//! version whose snapshot is live, and `max_reachable` is the highest version
//! still reachable by redo. All undo/redo/branch arithmetic is pure and lives
//! here so it can be exercised without a database; persistence and locking
//! belong to the callers.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Version numbers start at 1; a document with any history has a version 1.
pub const FIRST_VERSION: i64 = 1;

// ---------------------------------------------------------------------------
// Pointer state
// ---------------------------------------------------------------------------

/// The per-document pointer triple.
///
/// Valid states satisfy `FIRST_VERSION <= current <= max_reachable <= head`.
/// A loaded triple that violates this is corrupt and must be surfaced to the
/// caller, never silently repaired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerState {
    /// Highest version number ever written. Monotonic, never decreases.
    pub head: i64,
    /// Version whose snapshot is the document's live content.
    pub current: i64,
    /// Highest version reachable by repeated redo from `current`.
    pub max_reachable: i64,
}

impl PointerState {
    /// State of a document that has exactly its initial version.
    ///
    /// Also used as the assumed state for documents that predate pointer
    /// tracking: they have history but no pointer row.
    pub fn initial() -> Self {
        Self::at_head(FIRST_VERSION)
    }

    /// State right after a version landed at `version`.
    ///
    /// Appending jumps all three fields to the new version. If the pointer
    /// was sitting behind `max_reachable`, the versions above it are now
    /// permanently unreachable via redo (they stay stored -- branch discard
    /// never deletes rows).
    pub fn at_head(version: i64) -> Self {
        PointerState {
            head: version,
            current: version,
            max_reachable: version,
        }
    }

    /// Whether the triple satisfies `1 <= current <= max_reachable <= head`.
    pub fn is_consistent(&self) -> bool {
        FIRST_VERSION <= self.current
            && self.current <= self.max_reachable
            && self.max_reachable <= self.head
    }

    /// Undo is possible whenever the pointer sits above version 1.
    pub fn can_undo(&self) -> bool {
        self.current > FIRST_VERSION
    }

    /// Redo is possible whenever versions remain between here and the
    /// reachable horizon.
    pub fn can_redo(&self) -> bool {
        self.current < self.max_reachable
    }

    /// Move the pointer one version back, or `None` at the lower boundary.
    ///
    /// `head` and `max_reachable` are untouched: undo is pure pointer
    /// movement and never shrinks the redo horizon.
    pub fn step_back(self) -> Option<Self> {
        if !self.can_undo() {
            return None;
        }
        Some(PointerState {
            current: self.current - 1,
            ..self
        })
    }

    /// Move the pointer one version forward, or `None` at the redo horizon.
    pub fn step_forward(self) -> Option<Self> {
        if !self.can_redo() {
            return None;
        }
        Some(PointerState {
            current: self.current + 1,
            ..self
        })
    }

    /// Derive the UI-facing status flags.
    pub fn status(&self) -> VersionStatus {
        VersionStatus {
            current_version: self.current,
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }
}

/// What the editor needs to render its undo/redo controls.
///
/// Serialized with camelCase keys -- the field names are part of the HTTP
/// contract with the editor frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionStatus {
    pub current_version: i64,
    pub can_undo: bool,
    pub can_redo: bool,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
