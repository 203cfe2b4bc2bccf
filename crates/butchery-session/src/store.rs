//! The session store: single owner of the access/refresh token pair.
//!
//! Every mutation writes durable storage first and only then updates the
//! in-memory pair, so anything that reads after a call returns sees the
//! same state the storage holds.

use crate::session_fsm::{SessionMachine, SessionMachineInput, SessionState};
use crate::{SessionError, SessionResult};
use butchery_api::TokenPair;
use butchery_storage::{StoredTokens, TokenVault};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

/// Callback type for session state change notifications.
pub type SessionStateCallback = Box<dyn Fn(SessionState) + Send + Sync>;

struct Inner {
    fsm: SessionMachine,
    tokens: StoredTokens,
}

impl Inner {
    fn state(&self) -> SessionState {
        SessionState::from(self.fsm.state())
    }

    /// Apply `input` and return the state before and after.
    fn apply(&mut self, input: SessionMachineInput) -> SessionResult<(SessionState, SessionState)> {
        let old_state = self.state();
        self.fsm.consume(&input).map_err(|_| {
            SessionError::InvalidStateTransition(format!(
                "Cannot apply {:?} in state {:?}",
                input,
                self.fsm.state()
            ))
        })?;
        Ok((old_state, self.state()))
    }
}

/// Session context shared (behind an `Arc`) with everything that needs to
/// know whether a user is logged in.
///
/// Starts [`SessionState::Indeterminate`]; call [`SessionStore::hydrate`]
/// once durable storage is reachable.
pub struct SessionStore {
    vault: TokenVault,
    inner: Mutex<Inner>,
    /// Optional callback for state change notifications.
    state_callback: Mutex<Option<SessionStateCallback>>,
}

impl SessionStore {
    pub fn new(vault: TokenVault) -> Self {
        Self {
            vault,
            inner: Mutex::new(Inner {
                fsm: SessionMachine::new(),
                tokens: StoredTokens::default(),
            }),
            state_callback: Mutex::new(None),
        }
    }

    /// Set a callback to be notified of state changes, e.g. to re-render.
    pub fn set_state_callback(&self, callback: SessionStateCallback) {
        *self.state_callback.lock() = Some(callback);
    }

    fn notify(&self, old_state: SessionState, new_state: SessionState) {
        if old_state == new_state {
            return;
        }
        debug!(old_state = %old_state, new_state = %new_state, "Session state transition");
        if let Some(callback) = self.state_callback.lock().as_ref() {
            callback(new_state);
        }
    }

    /// Read the stored tokens and resolve the state.
    ///
    /// Only the first call (while still Indeterminate) reads storage; after
    /// that, including after an explicit login or logout, it returns the
    /// current state. A storage read failure resolves to LoggedOut.
    pub fn hydrate(&self) -> SessionState {
        let mut inner = self.inner.lock();
        if inner.state().is_resolved() {
            debug!(state = %inner.state(), "Session already resolved, skipping hydration");
            return inner.state();
        }

        let stored = match self.vault.load() {
            Ok(tokens) => tokens,
            Err(e) => {
                warn!(error = %e, "Failed to read stored session, treating as logged out");
                StoredTokens::default()
            }
        };

        let input = if stored.has_session() {
            info!("Restored stored session");
            inner.tokens = stored;
            SessionMachineInput::StoredSessionFound
        } else {
            debug!("No stored session");
            inner.tokens = StoredTokens::default();
            SessionMachineInput::NoStoredSession
        };

        let transition = inner.apply(input);
        let state = inner.state();
        drop(inner);

        match transition {
            Ok((old_state, new_state)) => self.notify(old_state, new_state),
            Err(e) => warn!(error = %e, "Hydration transition rejected"),
        }
        state
    }

    /// Persist a fresh token pair, then make it current. Replaces any pair
    /// already held.
    pub fn login(&self, tokens: &TokenPair) -> SessionResult<()> {
        if tokens.access_token.is_empty() {
            return Err(SessionError::InvalidToken(
                "access token must not be empty".to_string(),
            ));
        }
        if tokens.refresh_token.is_empty() {
            return Err(SessionError::InvalidToken(
                "refresh token must not be empty".to_string(),
            ));
        }

        let mut inner = self.inner.lock();
        self.vault
            .store(&tokens.access_token, &tokens.refresh_token)?;
        let (old_state, new_state) = inner.apply(SessionMachineInput::Login)?;
        inner.tokens = StoredTokens {
            access_token: Some(tokens.access_token.clone()),
            refresh_token: Some(tokens.refresh_token.clone()),
        };
        drop(inner);

        info!("Logged in");
        self.notify(old_state, new_state);
        Ok(())
    }

    /// Remove the stored tokens and forget the in-memory pair. Safe to call
    /// with no session.
    ///
    /// Memory is cleared even when removing the stored tokens fails; that
    /// failure is still returned.
    pub fn logout(&self) -> SessionResult<()> {
        let mut inner = self.inner.lock();
        let cleared = self.vault.clear();
        let transition = inner.apply(SessionMachineInput::Logout);
        inner.tokens = StoredTokens::default();
        drop(inner);

        if let Ok((old_state, new_state)) = transition {
            self.notify(old_state, new_state);
        }

        cleared.map_err(|e| {
            warn!(error = %e, "Failed to remove stored tokens");
            SessionError::from(e)
        })?;
        info!("Logged out");
        Ok(())
    }

    /// Swap in a refreshed access token, keeping the refresh token.
    pub fn replace_access_token(&self, access_token: &str) -> SessionResult<()> {
        if access_token.is_empty() {
            return Err(SessionError::InvalidToken(
                "access token must not be empty".to_string(),
            ));
        }

        let mut inner = self.inner.lock();
        if !inner.state().is_authenticated() {
            return Err(SessionError::NotLoggedIn);
        }
        self.vault.store_access_token(access_token)?;
        inner.apply(SessionMachineInput::AccessTokenRefreshed)?;
        inner.tokens.access_token = Some(access_token.to_string());

        debug!("Access token replaced");
        Ok(())
    }

    pub fn state(&self) -> SessionState {
        self.inner.lock().state()
    }

    pub fn access_token(&self) -> Option<String> {
        self.inner.lock().tokens.access_token.clone()
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.inner.lock().tokens.refresh_token.clone()
    }

    /// True iff a non-empty access token is held. The refresh token alone
    /// never counts.
    pub fn is_authenticated(&self) -> bool {
        self.inner.lock().tokens.has_session()
    }

    /// The current pair, if logged in.
    pub fn tokens(&self) -> Option<TokenPair> {
        let inner = self.inner.lock();
        match (&inner.tokens.access_token, &inner.tokens.refresh_token) {
            (Some(access), refresh) if !access.is_empty() => Some(TokenPair {
                access_token: access.clone(),
                refresh_token: refresh.clone().unwrap_or_default(),
            }),
            _ => None,
        }
    }
}
