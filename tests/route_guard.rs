use std::sync::{Arc, Mutex};

use tournabot::routing::guard::{LOGIN_ROUTE, Navigation, Navigator, SessionProvider};
use tournabot::routing::table::tournament_routes;

struct StubSessions {
    user: Mutex<Option<String>>,
    unreachable: bool,
}

impl StubSessions {
    fn anonymous() -> Self {
        Self {
            user: Mutex::new(None),
            unreachable: false,
        }
    }

    fn logged_in(name: &str) -> Self {
        Self {
            user: Mutex::new(Some(name.to_string())),
            unreachable: false,
        }
    }

    fn broken() -> Self {
        Self {
            user: Mutex::new(None),
            unreachable: true,
        }
    }

    fn log_in(&self, name: &str) {
        *self.user.lock().unwrap() = Some(name.to_string());
    }
}

impl SessionProvider for StubSessions {
    fn current_user(&self) -> Result<Option<String>, anyhow::Error> {
        if self.unreachable {
            anyhow::bail!("identity provider unreachable");
        }
        Ok(self.user.lock().unwrap().clone())
    }
}

fn sample_path(pattern: &str) -> String {
    pattern.replace(":id", "42")
}

#[test]
fn protected_routes_redirect_to_login_without_a_session() {
    let navigator = Navigator::new(tournament_routes(), Arc::new(StubSessions::anonymous()));
    let protected: Vec<String> = navigator
        .table()
        .entries()
        .iter()
        .filter(|entry| entry.requires_auth)
        .map(|entry| sample_path(entry.path))
        .collect();

    for path in protected {
        let outcome = navigator.navigate(&path);
        assert_eq!(
            outcome,
            Navigation::Redirected {
                from: path.clone(),
                to: LOGIN_ROUTE,
            },
            "route {path} rendered without a session"
        );
        assert_eq!(outcome.resolved_path(), "/login");
    }
}

#[test]
fn public_routes_are_allowed_regardless_of_session_state() {
    for provider in [StubSessions::anonymous(), StubSessions::logged_in("alice")] {
        let navigator = Navigator::new(tournament_routes(), Arc::new(provider));
        let public: Vec<(String, &'static str)> = navigator
            .table()
            .entries()
            .iter()
            .filter(|entry| !entry.requires_auth)
            .map(|entry| (sample_path(entry.path), entry.view))
            .collect();

        for (path, view) in public {
            assert_eq!(
                navigator.navigate(&path),
                Navigation::Allowed {
                    path: path.clone(),
                    view,
                }
            );
        }
    }
}

#[test]
fn logging_in_unlocks_the_schedule_page() {
    let sessions = Arc::new(StubSessions::anonymous());
    let navigator = Navigator::new(
        tournament_routes(),
        Arc::clone(&sessions) as Arc<dyn SessionProvider>,
    );

    let outcome = navigator.navigate("/schedule");
    assert_eq!(outcome.resolved_path(), "/login");

    sessions.log_in("alice");
    let outcome = navigator.navigate("/schedule");
    assert_eq!(outcome.resolved_path(), "/schedule");
    assert_eq!(
        outcome,
        Navigation::Allowed {
            path: "/schedule".to_string(),
            view: "Schedule",
        }
    );
}

#[test]
fn an_unreachable_identity_provider_fails_closed() {
    let navigator = Navigator::new(tournament_routes(), Arc::new(StubSessions::broken()));

    assert_eq!(
        navigator.navigate("/teams"),
        Navigation::Redirected {
            from: "/teams".to_string(),
            to: LOGIN_ROUTE,
        }
    );
    // Public pages stay reachable even when the provider is down.
    assert!(matches!(
        navigator.navigate("/login"),
        Navigation::Allowed { .. }
    ));
}

#[test]
fn unknown_paths_are_reported_as_not_found() {
    let navigator = Navigator::new(tournament_routes(), Arc::new(StubSessions::logged_in("alice")));
    assert_eq!(
        navigator.navigate("/does-not-exist"),
        Navigation::NotFound {
            path: "/does-not-exist".to_string(),
        }
    );
}

#[test]
fn authenticated_navigation_resolves_param_routes() {
    let navigator = Navigator::new(tournament_routes(), Arc::new(StubSessions::logged_in("alice")));
    assert_eq!(
        navigator.navigate("/match/17"),
        Navigation::Allowed {
            path: "/match/17".to_string(),
            view: "Match",
        }
    );
}
