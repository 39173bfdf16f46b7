#[cfg(test)]
#[path = "app_state_test.rs"]
mod app_state_test;

use shared::models::{CurrentUser, Role};
use yewdux::Store;

/// What the UI currently believes about the session. One tagged value
/// instead of a spread of booleans, so the gate and the guards can
/// never disagree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// The bootstrap refresh has not resolved yet. Guards must not
    /// evaluate in this phase.
    #[default]
    Verifying,
    /// No credential; anonymous affordances only.
    Anonymous,
    /// A live credential with this role.
    Authenticated(Role),
}

impl SessionPhase {
    /// Role of the live credential, if any.
    pub fn role(self) -> Option<Role> {
        match self {
            Self::Authenticated(role) => Some(role),
            Self::Verifying | Self::Anonymous => None,
        }
    }

    /// Whether verification has resolved either way.
    pub fn is_ready(self) -> bool {
        !matches!(self, Self::Verifying)
    }

    /// Whether an access credential is held.
    pub fn has_credential(self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Tab-wide UI state.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub session: SessionPhase,
    pub profile: Option<CurrentUser>,
}
