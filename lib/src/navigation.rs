//! Navigation engine using path-based history.
//!
//! A [`Navigator`] owns a validated route table together with the
//! [`History`] it's addressed through. Locations are resolved by stripping
//! the base path, matching the first table entry and following redirects
//! until a view is reached.
//!
//! # Process-wide navigator
//!
//! The application installs a single navigator at startup using [`install`].
//! Before that the navigator is unbuilt and [`active`] returns `None`; after
//! that it stays in place for the rest of the process.

use std::sync::OnceLock;

use crate::error::{ErrorKind, Result};
use crate::routes::{self, RouteDefinition, RouteTarget, View};

/// Upper bound on redirects followed while resolving a single location.
pub const MAX_REDIRECTS: usize = 8;

static NAVIGATOR: OnceLock<Navigator> = OnceLock::new();

/// Path-based (non-fragment) history rooted at a base path.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct History {
    base: String,
}

impl Default for History {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History {
    /// Creates a new history, normalizing `base` so that it both starts and
    /// ends with a slash.
    pub fn new(base: impl AsRef<str>) -> Self {
        let trimmed = base.as_ref().trim().trim_matches('/');
        let base = if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{trimmed}/")
        };
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Full location for an in-app path.
    pub fn href(&self, path: &str) -> String {
        format!("{}{}", self.base, path.trim_start_matches('/'))
    }

    /// In-app path for a full location, `None` if the location lies outside
    /// of the base.
    pub fn strip(&self, location: &str) -> Option<String> {
        let location = strip_query(location);
        let base = self.base.as_str();
        // compared the same way route paths are, i.e. ignoring ascii case
        if let Some(prefix) = location.get(..base.len()) {
            if prefix.eq_ignore_ascii_case(base) {
                return Some(format!("/{}", &location[base.len()..]));
            }
        }
        // base without its trailing slash, e.g. `/app` for `/app/`
        if location.eq_ignore_ascii_case(base.trim_end_matches('/')) {
            return Some("/".to_string());
        }
        None
    }
}

/// Drops query string and fragment from a location.
fn strip_query(location: &str) -> &str {
    let end = location.find(|c: char| c == '?' || c == '#').unwrap_or(location.len());
    &location[..end]
}

/// Result of resolving a location against the route table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Resolution {
    /// Entry that ended up rendering.
    pub route: RouteDefinition,
    pub view: View,
    /// Final in-app path, after redirects.
    pub path: String,
    /// In-app paths that redirected, in the order they were visited.
    pub redirected_from: Vec<String>,
}

impl Resolution {
    pub fn was_redirected(&self) -> bool {
        !self.redirected_from.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct Navigator {
    history: History,
    routes: &'static [RouteDefinition],
}

impl Navigator {
    /// Validates `routes` and binds them to `history`.
    pub fn new(history: History, routes: &'static [RouteDefinition]) -> Result<Self> {
        routes::validate(routes)?;
        Ok(Self { history, routes })
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn routes(&self) -> &'static [RouteDefinition] {
        self.routes
    }

    /// Resolves a full location, as seen by the browser, i.e. including the
    /// base path.
    pub fn resolve(&self, location: &str) -> Result<Resolution> {
        let path = self
            .history
            .strip(location)
            .ok_or_else(|| ErrorKind::RouteNotFound(location.to_string()))?;
        self.resolve_path(&path)
    }

    /// Resolves an in-app path, i.e. one relative to the base path.
    pub fn resolve_path(&self, path: &str) -> Result<Resolution> {
        let mut current = strip_query(path).to_string();
        let mut redirected_from = Vec::new();

        loop {
            let route = routes::find(self.routes, &current)
                .ok_or_else(|| ErrorKind::RouteNotFound(current.clone()))?;
            match route.target {
                RouteTarget::Render(view) => {
                    tracing::trace!(path = %current, view = %view, "resolved route");
                    return Ok(Resolution {
                        route: *route,
                        view,
                        path: current,
                        redirected_from,
                    });
                }
                RouteTarget::Redirect(target) => {
                    if redirected_from.len() >= MAX_REDIRECTS {
                        return Err(ErrorKind::RedirectLoop(path.to_string()).into());
                    }
                    tracing::trace!(from = %current, to = target, "following redirect");
                    redirected_from.push(std::mem::replace(&mut current, target.to_string()));
                }
            }
        }
    }

    /// Full location of the route registered under `name`.
    pub fn href_for(&self, name: &str) -> Result<String> {
        routes::by_name(self.routes, name)
            .map(|route| self.history.href(route.path))
            .ok_or_else(|| ErrorKind::UnknownRouteName(name.to_string()).into())
    }
}

/// Builds the application navigator from the default route table and
/// installs it process-wide.
pub fn install(history: History) -> Result<&'static Navigator> {
    let navigator = Navigator::new(history, routes::ROUTES)?;
    NAVIGATOR
        .set(navigator)
        .map_err(|_| ErrorKind::NavigatorAlreadyInstalled)?;
    let navigator = active().ok_or(ErrorKind::NavigatorAlreadyInstalled)?;
    tracing::debug!(
        base = navigator.history().base(),
        routes = navigator.routes().len(),
        "installed navigator"
    );
    Ok(navigator)
}

/// Currently installed navigator, if any.
pub fn active() -> Option<&'static Navigator> {
    NAVIGATOR.get()
}
