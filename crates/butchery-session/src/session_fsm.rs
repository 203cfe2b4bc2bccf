//! Session state machine using rust-fsm.
//!
//! ```text
//!                  ┌─────────────────┐
//!                  │  Indeterminate  │ (initial, storage not read yet)
//!                  └────────┬────────┘
//!     NoStoredSession /     │     StoredSessionFound /
//!     Logout                │     Login
//!          ┌────────────────┴────────────────┐
//!          ▼                                 ▼
//! ┌─────────────────┐       Login      ┌─────────────────┐
//! │    LoggedOut    │ ───────────────► │    LoggedIn     │ ◄─┐ Login /
//! │                 │ ◄─────────────── │                 │ ──┘ AccessTokenRefreshed
//! └─────────────────┘      Logout      └─────────────────┘
//! ```
//!
//! Hydration inputs are only accepted from Indeterminate, so the storage
//! read resolves the state at most once.

use rust_fsm::*;
use serde::{Deserialize, Serialize};

state_machine! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub session_machine(Indeterminate)

    Indeterminate => {
        StoredSessionFound => LoggedIn,
        NoStoredSession => LoggedOut,
        Login => LoggedIn,
        Logout => LoggedOut
    },
    LoggedOut => {
        Login => LoggedIn,
        Logout => LoggedOut
    },
    LoggedIn => {
        // Full pair replacement
        Login => LoggedIn,
        AccessTokenRefreshed => LoggedIn,
        Logout => LoggedOut
    }
}

pub use session_machine::Input as SessionMachineInput;
pub use session_machine::State as SessionMachineState;
pub use session_machine::StateMachine as SessionMachine;

/// Authentication state as seen by views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Durable storage has not been read yet. Render neither the logged-in
    /// nor the logged-out variant.
    Indeterminate,
    LoggedOut,
    LoggedIn,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::LoggedIn)
    }

    /// Returns true once the storage read (or an explicit login/logout) has
    /// settled the state.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, SessionState::Indeterminate)
    }
}

impl From<&SessionMachineState> for SessionState {
    fn from(state: &SessionMachineState) -> Self {
        match state {
            SessionMachineState::Indeterminate => SessionState::Indeterminate,
            SessionMachineState::LoggedOut => SessionState::LoggedOut,
            SessionMachineState::LoggedIn => SessionState::LoggedIn,
        }
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SessionState::Indeterminate => "indeterminate",
            SessionState::LoggedOut => "logged_out",
            SessionState::LoggedIn => "logged_in",
        };
        f.write_str(label)
    }
}
