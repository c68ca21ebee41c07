mod common;

use common::{admin, attendant};
use rsurvey::errors::AppError;
use rsurvey::guard::{Decision, RequiredRole, Route, decide, landing_route, navigate, require};
use rsurvey::session::Session;

#[test]
fn test_decision_table() {
    let admin = admin();
    let user = attendant();
    let blank = Session::new("  ", Some("3".into()), true);

    let cases = [
        (None, RequiredRole::Home, Decision::Redirect(Route::Login)),
        (None, RequiredRole::Backlog, Decision::Redirect(Route::Login)),
        (Some(&blank), RequiredRole::Backlog, Decision::Redirect(Route::Login)),
        (Some(&admin), RequiredRole::Home, Decision::Redirect(Route::Backlog)),
        (Some(&admin), RequiredRole::Backlog, Decision::Render),
        (Some(&user), RequiredRole::Home, Decision::Render),
        (Some(&user), RequiredRole::Backlog, Decision::Redirect(Route::Home)),
    ];

    for (session, role, expected) in cases {
        assert_eq!(decide(session, role), expected, "{session:?} {role:?}");
    }
}

#[test]
fn test_redirect_target_is_terminal() {
    let admin = admin();
    let user = attendant();
    for session in [None, Some(&admin), Some(&user)] {
        for route in [Route::Home, Route::Backlog] {
            let landed = navigate(session, route);
            assert_eq!(navigate(session, landed), landed);
        }
    }
}

#[test]
fn test_public_routes_never_redirect() {
    for route in [Route::Login, Route::Signup, Route::Rating(42)] {
        assert_eq!(navigate(None, route), route);
    }
}

#[test]
fn test_route_parse() {
    assert_eq!(Route::parse("/").unwrap(), Route::Login);
    assert_eq!(Route::parse("/signup").unwrap(), Route::Signup);
    assert_eq!(Route::parse("/home/").unwrap(), Route::Home);
    assert_eq!(Route::parse("/backlog").unwrap(), Route::Backlog);
    assert_eq!(Route::parse("/rating/17").unwrap(), Route::Rating(17));
    assert_eq!(Route::Rating(17).to_string(), "/rating/17");

    for bad in ["/rating/0", "/rating/abc", "/rating", "/admin", ""] {
        assert!(
            matches!(Route::parse(bad), Err(AppError::InvalidRoute(_))),
            "{bad} should be rejected"
        );
    }
}

#[test]
fn test_require_maps_redirects_to_errors() {
    assert!(matches!(
        require(None, RequiredRole::Home),
        Err(AppError::NotLoggedIn)
    ));
    match require(Some(&attendant()), RequiredRole::Backlog) {
        Err(AppError::AccessDenied(path)) => assert_eq!(path, "/home"),
        other => panic!("unexpected {other:?}"),
    }
    assert!(require(Some(&admin()), RequiredRole::Backlog).is_ok());
}

#[test]
fn test_landing_route_follows_role() {
    assert_eq!(landing_route(&admin()), Route::Backlog);
    assert_eq!(landing_route(&attendant()), Route::Home);
}
