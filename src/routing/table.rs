/// A static mapping from a URL path to a view and an access requirement.
/// The table is built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pub path: &'static str,
    pub view: &'static str,
    pub requires_auth: bool,
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new(entries: Vec<RouteEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// First-match lookup. `:param` segments match any single non-empty
    /// segment, as in `/match/:id`.
    pub fn match_path(&self, path: &str) -> Option<&RouteEntry> {
        self.entries
            .iter()
            .find(|entry| path_matches(entry.path, path))
    }
}

fn path_matches(pattern: &str, path: &str) -> bool {
    let pattern_segments: Vec<&str> = segments(pattern);
    let path_segments: Vec<&str> = segments(path);
    if pattern_segments.len() != path_segments.len() {
        return false;
    }
    pattern_segments
        .iter()
        .zip(&path_segments)
        .all(|(pattern, segment)| pattern.starts_with(':') || pattern == segment)
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

/// The tournament frontend's route table. Everything past the public
/// landing, login, and registration pages requires an authenticated session.
pub fn tournament_routes() -> RouteTable {
    RouteTable::new(vec![
        RouteEntry {
            path: "/",
            view: "Home",
            requires_auth: false,
        },
        RouteEntry {
            path: "/login",
            view: "Login",
            requires_auth: false,
        },
        RouteEntry {
            path: "/register",
            view: "Register",
            requires_auth: false,
        },
        RouteEntry {
            path: "/tournaments",
            view: "Tournaments",
            requires_auth: true,
        },
        RouteEntry {
            path: "/tournament/:id",
            view: "Tournament",
            requires_auth: true,
        },
        RouteEntry {
            path: "/match/:id",
            view: "Match",
            requires_auth: true,
        },
        RouteEntry {
            path: "/dispute",
            view: "Dispute",
            requires_auth: true,
        },
        RouteEntry {
            path: "/schedule",
            view: "Schedule",
            requires_auth: true,
        },
        RouteEntry {
            path: "/teams",
            view: "Teams",
            requires_auth: true,
        },
    ])
}
