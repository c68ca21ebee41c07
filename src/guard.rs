//! Client-side navigation surface and the route guard.
//!
//! The guard is a pure decision table over (has token, is admin, required
//! role). It never touches storage or the network: callers pass the session
//! they loaded.

use crate::errors::{AppError, AppResult};
use crate::session::Session;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static RATING_ROUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/rating/(\d+)$").expect("valid rating route regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Signup,
    Rating(i64),
    Home,
    Backlog,
}

/// Role a guarded route requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredRole {
    /// Plain authenticated (non-administrator) user.
    Home,
    /// Administrator.
    Backlog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Render,
    Redirect(Route),
}

impl Route {
    /// Parse a client path. Trailing slashes are ignored, except for `/`.
    pub fn parse(path: &str) -> AppResult<Self> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" if trimmed.starts_with('/') => "/",
            other => other,
        };

        match normalized {
            "/" => Ok(Route::Login),
            "/signup" => Ok(Route::Signup),
            "/home" => Ok(Route::Home),
            "/backlog" => Ok(Route::Backlog),
            other => {
                let caps = RATING_ROUTE
                    .captures(other)
                    .ok_or_else(|| AppError::InvalidRoute(path.to_string()))?;
                let id: i64 = caps[1]
                    .parse()
                    .map_err(|_| AppError::InvalidRoute(path.to_string()))?;
                if id <= 0 {
                    return Err(AppError::InvalidRoute(path.to_string()));
                }
                Ok(Route::Rating(id))
            }
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Rating(id) => format!("/rating/{id}"),
            Route::Home => "/home".to_string(),
            Route::Backlog => "/backlog".to_string(),
        }
    }

    /// `None` for routes anyone may open.
    pub fn required_role(&self) -> Option<RequiredRole> {
        match self {
            Route::Home => Some(RequiredRole::Home),
            Route::Backlog => Some(RequiredRole::Backlog),
            Route::Login | Route::Signup | Route::Rating(_) => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl RequiredRole {
    pub fn route(&self) -> Route {
        match self {
            RequiredRole::Home => Route::Home,
            RequiredRole::Backlog => Route::Backlog,
        }
    }
}

/// Decide whether a guarded area may render for the given session.
pub fn decide(session: Option<&Session>, required: RequiredRole) -> Decision {
    let Some(session) = session.filter(|s| s.has_token()) else {
        return Decision::Redirect(Route::Login);
    };

    match (session.is_admin, required) {
        (true, RequiredRole::Home) => Decision::Redirect(Route::Backlog),
        (false, RequiredRole::Backlog) => Decision::Redirect(Route::Home),
        _ => Decision::Render,
    }
}

/// Follow a navigation request through the guard and return the route
/// that ends up rendered. At most one redirect is followed: every redirect
/// target is either unguarded or matches the session's role.
pub fn navigate(session: Option<&Session>, requested: Route) -> Route {
    let Some(required) = requested.required_role() else {
        return requested;
    };

    match decide(session, required) {
        Decision::Render => requested,
        Decision::Redirect(target) => target,
    }
}

/// Guard entry for commands bound to a role: Ok when the area renders,
/// otherwise the redirect target as an error.
pub fn require(session: Option<&Session>, required: RequiredRole) -> AppResult<()> {
    match decide(session, required) {
        Decision::Render => Ok(()),
        Decision::Redirect(Route::Login) => Err(AppError::NotLoggedIn),
        Decision::Redirect(target) => Err(AppError::AccessDenied(target.path())),
    }
}

/// Where a freshly logged-in user lands.
pub fn landing_route(session: &Session) -> Route {
    if session.is_admin {
        Route::Backlog
    } else {
        Route::Home
    }
}
