//! Route gating by session state.

use butchery_session::SessionState;
use serde::Serialize;

pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const DASHBOARD: &str = "/dashboard";
pub const ADMIN: &str = "/admin";
pub const ADMIN_LOGIN: &str = "/admin/login";
/// Where a successful registration lands: the login page with the banner.
pub const REGISTERED_LOGIN: &str = "/login?registered=true";

/// What a page should do for the current session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "target", rename_all = "snake_case")]
pub enum RouteDecision {
    Render,
    /// Session not known yet; show a neutral placeholder instead of
    /// guessing.
    RenderNeutral,
    Redirect(String),
}

fn is_under(path: &str, prefix: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/') || rest.starts_with('?'))
}

/// Decide what to do with `path` (without locale prefix).
///
/// `/dashboard` and `/admin` need a session; the login and register pages
/// send an authenticated user to the dashboard.
pub fn gate(path: &str, state: SessionState) -> RouteDecision {
    let is_admin_login = is_under(path, ADMIN_LOGIN);
    let protected = is_under(path, DASHBOARD) || (is_under(path, ADMIN) && !is_admin_login);
    let guest_only = is_under(path, LOGIN) || is_under(path, REGISTER);

    match state {
        SessionState::Indeterminate if protected || guest_only => RouteDecision::RenderNeutral,
        SessionState::LoggedOut if protected => {
            let target = if is_under(path, ADMIN) { ADMIN_LOGIN } else { LOGIN };
            RouteDecision::Redirect(target.to_string())
        }
        SessionState::LoggedIn if guest_only => RouteDecision::Redirect(DASHBOARD.to_string()),
        _ => RouteDecision::Render,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_pages_redirect_when_logged_out() {
        assert_eq!(
            gate("/dashboard", SessionState::LoggedOut),
            RouteDecision::Redirect(LOGIN.to_string())
        );
        assert_eq!(
            gate("/dashboard/orders", SessionState::LoggedOut),
            RouteDecision::Redirect(LOGIN.to_string())
        );
        assert_eq!(
            gate("/admin", SessionState::LoggedOut),
            RouteDecision::Redirect(ADMIN_LOGIN.to_string())
        );
    }

    #[test]
    fn test_protected_pages_neutral_while_indeterminate() {
        assert_eq!(
            gate("/dashboard", SessionState::Indeterminate),
            RouteDecision::RenderNeutral
        );
        assert_eq!(
            gate("/login", SessionState::Indeterminate),
            RouteDecision::RenderNeutral
        );
    }

    #[test]
    fn test_protected_pages_render_when_logged_in() {
        assert_eq!(gate("/dashboard", SessionState::LoggedIn), RouteDecision::Render);
        assert_eq!(gate("/admin/products", SessionState::LoggedIn), RouteDecision::Render);
    }

    #[test]
    fn test_guest_pages_redirect_when_logged_in() {
        assert_eq!(
            gate("/login", SessionState::LoggedIn),
            RouteDecision::Redirect(DASHBOARD.to_string())
        );
        assert_eq!(
            gate(REGISTERED_LOGIN, SessionState::LoggedIn),
            RouteDecision::Redirect(DASHBOARD.to_string())
        );
        assert_eq!(gate("/register", SessionState::LoggedOut), RouteDecision::Render);
    }

    #[test]
    fn test_admin_login_is_public() {
        assert_eq!(gate("/admin/login", SessionState::LoggedOut), RouteDecision::Render);
    }

    #[test]
    fn test_public_pages_always_render() {
        for state in [
            SessionState::Indeterminate,
            SessionState::LoggedOut,
            SessionState::LoggedIn,
        ] {
            assert_eq!(gate("/", state), RouteDecision::Render);
            assert_eq!(gate("/dashboards", state), RouteDecision::Render);
            assert_eq!(gate("/forgot-password", state), RouteDecision::Render);
        }
    }
}
