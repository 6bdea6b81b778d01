//! Record of a single dispatch cycle.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Correlation identifier attached to every log event of one dispatch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DispatchId(Uuid);

impl DispatchId {
    /// Creates a new random dispatch identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a dispatch identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for DispatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DispatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Exit taken by a dispatch cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DispatchOutcomeKind {
    /// The message echoed this system's own output and was dropped.
    IgnoredSelfMessage,
    /// The payload could not be decoded and was dropped.
    DiscardedMalformed,
    /// No command matched for this caller; the help listing was sent.
    CommandNotFound {
        /// The unmatched command token.
        command: String,
    },
    /// The argument count did not fit the signature; notice and help were sent.
    ArityMismatch {
        /// The matched command.
        command: String,
        /// Number of arguments supplied.
        supplied: usize,
    },
    /// The handler returned normally.
    Completed {
        /// The executed command.
        command: String,
    },
    /// The handler failed; an error report was sent.
    HandlerFailed {
        /// The executed command.
        command: String,
    },
}

/// Summary of one dispatch cycle, returned to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchOutcome {
    id: DispatchId,
    handled_at: DateTime<Utc>,
    kind: DispatchOutcomeKind,
    responses: Vec<String>,
}

impl DispatchOutcome {
    /// Creates an outcome stamped with the current time.
    #[must_use]
    pub fn new(
        id: DispatchId,
        kind: DispatchOutcomeKind,
        responses: Vec<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id,
            handled_at: clock.utc(),
            kind,
            responses,
        }
    }

    /// Returns the dispatch identifier.
    #[must_use]
    pub const fn id(&self) -> DispatchId {
        self.id
    }

    /// Returns when the cycle finished.
    #[must_use]
    pub const fn handled_at(&self) -> DateTime<Utc> {
        self.handled_at
    }

    /// Returns the exit taken.
    #[must_use]
    pub const fn kind(&self) -> &DispatchOutcomeKind {
        &self.kind
    }

    /// Returns the response texts handed to delivery, in send order.
    #[must_use]
    pub fn responses(&self) -> &[String] {
        &self.responses
    }
}
