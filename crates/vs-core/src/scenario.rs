//! Pass scenarios.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The mode a pass runs in.
///
/// `Init` and `Test` always carry a subdomain, making "subdomain required
/// for non-update scenes" a type-level invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scene", rename_all = "lowercase")]
pub enum Scenario {
    /// Global-track migration of every module to its declared file version.
    Update,
    /// Per-subdomain initialization track.
    Init { subdomain: String },
    /// Self-test track: no migrations, test handlers only.
    Test { subdomain: String },
}

impl Scenario {
    /// True for the global update track.
    pub fn is_update(&self) -> bool {
        matches!(self, Scenario::Update)
    }

    /// True when this scenario runs migration steps (`update` and `init`;
    /// the `test` scenario only invokes test handlers).
    pub fn migrates(&self) -> bool {
        matches!(self, Scenario::Update | Scenario::Init { .. })
    }

    /// The subdomain scoping the init track, if any.
    pub fn subdomain(&self) -> Option<&str> {
        match self {
            Scenario::Update => None,
            Scenario::Init { subdomain } | Scenario::Test { subdomain } => Some(subdomain),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scenario::Update => write!(f, "update"),
            Scenario::Init { subdomain } => write!(f, "init({subdomain})"),
            Scenario::Test { subdomain } => write!(f, "test({subdomain})"),
        }
    }
}

#[cfg(test)]
#[path = "scenario_test.rs"]
mod scenario_test;
