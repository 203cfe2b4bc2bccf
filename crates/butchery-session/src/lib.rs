//! Client-side session for the storefront.
//!
//! This crate provides:
//! - [`SessionStore`], the context object that owns the token pair and is
//!   shared with every view
//! - A three-state FSM (Indeterminate, LoggedOut, LoggedIn) so views can
//!   render a neutral state until durable storage has been read

mod error;
mod session_fsm;
mod store;

pub use error::{SessionError, SessionResult};
pub use session_fsm::session_machine;
pub use session_fsm::{SessionMachine, SessionMachineInput, SessionMachineState, SessionState};
pub use store::{SessionStateCallback, SessionStore};
