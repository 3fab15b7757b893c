use std::sync::Arc;

use crate::routing::table::RouteTable;

pub const LOGIN_ROUTE: &str = "/login";

/// Read-only view of the externally managed authentication state. The guard
/// never writes sessions; it only asks whether one exists right now.
pub trait SessionProvider: Send + Sync {
    fn current_user(&self) -> Result<Option<String>, anyhow::Error>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Allowed { path: String, view: &'static str },
    Redirected { from: String, to: &'static str },
    NotFound { path: String },
}

impl Navigation {
    pub fn resolved_path(&self) -> &str {
        match self {
            Navigation::Allowed { path, .. } => path,
            Navigation::Redirected { to, .. } => to,
            Navigation::NotFound { path } => path,
        }
    }
}

pub struct Navigator {
    table: RouteTable,
    provider: Arc<dyn SessionProvider>,
}

impl Navigator {
    pub fn new(table: RouteTable, provider: Arc<dyn SessionProvider>) -> Self {
        Self { table, provider }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Synchronous per-navigation check, no I/O: a protected route with no
    /// current session redirects to the login route, everything else renders.
    pub fn navigate(&self, path: &str) -> Navigation {
        let Some(route) = self.table.match_path(path) else {
            return Navigation::NotFound {
                path: path.to_string(),
            };
        };
        if route.requires_auth && !self.has_session() {
            return Navigation::Redirected {
                from: path.to_string(),
                to: LOGIN_ROUTE,
            };
        }
        Navigation::Allowed {
            path: path.to_string(),
            view: route.view,
        }
    }

    // An unreachable identity provider counts as no session. Fail closed.
    fn has_session(&self) -> bool {
        match self.provider.current_user() {
            Ok(user) => user.is_some(),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    "identity provider unavailable, treating session as absent"
                );
                false
            }
        }
    }
}
