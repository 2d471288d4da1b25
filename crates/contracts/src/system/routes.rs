//! Path -> page table and the guard in front of it.

use serde::{Deserialize, Serialize};

use super::auth::UserRole;
use super::navigation;
use super::session::SessionState;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    Login,
    Signup,
    Dashboard,
    Alerts,
    Animals,
    Health,
    Conservation,
    Tracking,
    Tickets,
    Education,
    Sustainability,
    Staff,
    Tasks,
    Security,
    Schedule,
    Reports,
    Settings,
    Profile,
    NotFound,
}

const ROUTES: &[(&str, Page)] = &[
    ("/login", Page::Login),
    ("/signup", Page::Signup),
    ("/dashboard", Page::Dashboard),
    ("/alerts", Page::Alerts),
    ("/animals", Page::Animals),
    ("/health", Page::Health),
    ("/conservation", Page::Conservation),
    ("/tracking", Page::Tracking),
    ("/tickets", Page::Tickets),
    ("/education", Page::Education),
    ("/sustainability", Page::Sustainability),
    ("/staff", Page::Staff),
    ("/tasks", Page::Tasks),
    ("/security", Page::Security),
    ("/schedule", Page::Schedule),
    ("/reports", Page::Reports),
    ("/settings", Page::Settings),
    ("/profile", Page::Profile),
];

impl Page {
    pub fn from_path(path: &str) -> Option<Page> {
        let path = normalize(path);
        ROUTES
            .iter()
            .find(|(p, _)| *p == path)
            .map(|(_, page)| *page)
    }

    pub fn path(&self) -> &'static str {
        ROUTES
            .iter()
            .find(|(_, page)| page == self)
            .map(|(p, _)| *p)
            .unwrap_or("/404")
    }

    /// Every page except the login/signup forms and not-found needs a session.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Page::Login | Page::Signup | Page::NotFound)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Login => "Sign in",
            Page::Signup => "Sign up",
            Page::Profile => "Profile",
            Page::NotFound => "Page not found",
            other => navigation::label_for(other.path()).unwrap_or("Dashboard"),
        }
    }
}

/// What the shell should do for a requested address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Render(Page),
    /// `from` keeps the originally requested address for the post-login hop.
    Redirect { to: String, from: Option<String> },
    /// Credential check in flight; show a spinner.
    Pending,
    /// Signed in, but the role may not see this page.
    Forbidden(Page),
}

/// Strip query/fragment and trailing slashes; empty becomes `/`.
pub fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or("");
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

pub fn resolve(path: &str, session: &SessionState) -> RouteDecision {
    let path = normalize(path);
    if path == "/" {
        return RouteDecision::Redirect {
            to: HOME_PATH.to_string(),
            from: None,
        };
    }
    let page = match Page::from_path(path) {
        Some(page) => page,
        None => return RouteDecision::Render(Page::NotFound),
    };
    if !page.is_protected() {
        return RouteDecision::Render(page);
    }
    if session.is_authenticating() {
        return RouteDecision::Pending;
    }
    match session.role() {
        None => RouteDecision::Redirect {
            to: LOGIN_PATH.to_string(),
            from: Some(path.to_string()),
        },
        Some(role) if !navigation::can_access(path, Some(role)) => RouteDecision::Forbidden(page),
        Some(_) => RouteDecision::Render(page),
    }
}

/// Where to go after a successful login: the preserved address when it is
/// a protected page the role may open, the dashboard otherwise.
pub fn post_login_target(from: Option<&str>, role: UserRole) -> String {
    from.and_then(Page::from_path)
        .filter(|page| page.is_protected())
        .filter(|page| navigation::can_access(page.path(), Some(role)))
        .map(|page| page.path().to_string())
        .unwrap_or_else(|| HOME_PATH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::UserProfile;

    fn signed_in(role: UserRole) -> SessionState {
        SessionState::Authenticated {
            profile: UserProfile {
                email: "someone@kws.go.ke".into(),
                display_name: "Someone".into(),
                role,
                department: "Conservation".into(),
            },
        }
    }

    #[test]
    fn test_anonymous_is_sent_to_login_with_origin() {
        let decision = resolve("/animals?tab=all", &SessionState::new());
        assert_eq!(
            decision,
            RouteDecision::Redirect {
                to: "/login".into(),
                from: Some("/animals".into())
            }
        );
    }

    #[test]
    fn test_root_redirects_to_dashboard() {
        assert_eq!(
            resolve("/", &signed_in(UserRole::User)),
            RouteDecision::Redirect {
                to: "/dashboard".into(),
                from: None
            }
        );
    }

    #[test]
    fn test_unknown_path_is_not_found_even_when_anonymous() {
        assert_eq!(
            resolve("/does-not-exist", &SessionState::new()),
            RouteDecision::Render(Page::NotFound)
        );
    }

    #[test]
    fn test_login_is_public() {
        assert_eq!(resolve("/login", &SessionState::new()), RouteDecision::Render(Page::Login));
    }

    #[test]
    fn test_pending_while_authenticating() {
        let session = SessionState::Authenticating {
            email: "admin@kws.go.ke".into(),
        };
        assert_eq!(resolve("/animals", &session), RouteDecision::Pending);
    }

    #[test]
    fn test_role_gate_uses_navigation_table() {
        assert_eq!(
            resolve("/reports", &signed_in(UserRole::User)),
            RouteDecision::Forbidden(Page::Reports)
        );
        assert_eq!(
            resolve("/reports/", &signed_in(UserRole::Admin)),
            RouteDecision::Render(Page::Reports)
        );
        assert_eq!(
            resolve("/profile", &signed_in(UserRole::User)),
            RouteDecision::Render(Page::Profile)
        );
    }

    #[test]
    fn test_post_login_target() {
        assert_eq!(post_login_target(Some("/tickets"), UserRole::User), "/tickets");
        assert_eq!(post_login_target(Some("/login"), UserRole::Admin), "/dashboard");
        assert_eq!(post_login_target(Some("/bogus"), UserRole::Admin), "/dashboard");
        assert_eq!(post_login_target(None, UserRole::User), "/dashboard");
    }

    #[test]
    fn test_post_login_target_skips_pages_the_role_cannot_open() {
        assert_eq!(post_login_target(Some("/reports"), UserRole::User), "/dashboard");
        assert_eq!(post_login_target(Some("/reports"), UserRole::Admin), "/reports");
        // the landing page itself is never forbidden
        assert_eq!(
            resolve(&post_login_target(Some("/staff"), UserRole::User), &signed_in(UserRole::User)),
            RouteDecision::Render(Page::Dashboard)
        );
    }

    #[test]
    fn test_titles() {
        assert_eq!(Page::Health.title(), "Health Tracking");
        assert_eq!(Page::Dashboard.title(), "Dashboard");
        assert_eq!(Page::NotFound.title(), "Page not found");
    }
}
