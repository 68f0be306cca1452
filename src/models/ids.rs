//! Typed identifiers for budgets, categories, entries, holdings, and snapshots
//!
//! Ids travel through JSON files and CLI flags as plain UUID strings. A kind
//! prefix (`snp-`, `hld-`, ...) is tolerated on input so the short labels
//! shown in tables can be pasted back.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// An id string that is not a UUID
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {kind} id: {input}")]
pub struct InvalidId {
    pub kind: &'static str,
    pub input: String,
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// A fresh random id
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Label for tables and messages, e.g. `snp-1a2b3c4d`
            pub fn short(&self) -> String {
                let simple = self.0.simple().to_string();
                format!("{}{}", $prefix, &simple[..8])
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        /// Full hyphenated UUID, the same form the JSON files carry
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0.hyphenated(), f)
            }
        }

        impl FromStr for $name {
            type Err = InvalidId;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                let bare = trimmed.strip_prefix($prefix).unwrap_or(trimmed);
                Uuid::parse_str(bare).map(Self).map_err(|_| InvalidId {
                    kind: $kind,
                    input: s.to_string(),
                })
            }
        }
    };
}

define_id!(BudgetId, "bud-", "budget");
define_id!(CategoryId, "cat-", "category");
define_id!(EntryId, "ent-", "entry");
define_id!(
    /// The asset or debt a snapshot measures
    HoldingId,
    "hld-",
    "holding"
);
define_id!(SnapshotId, "snp-", "snapshot");
