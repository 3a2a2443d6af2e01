//! Route table of the front end.
//!
//! Entries are matched in table order and the first match wins. The table is
//! a `static`, it never changes once the program is running.

use std::collections::HashSet;

use crate::error::{ErrorKind, Result};

pub const HOME: &str = "/";

pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const FORGOT_PASSWORD: &str = "/forgot-password";

/// View mounted by the shell when a route renders.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    Hash,
    Deserialize,
    Serialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum View {
    Login,
    Register,
    ForgotPassword,
}

impl View {
    pub fn id(&self) -> &'static str {
        (*self).into()
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Entrar",
            Self::Register => "Cadastro",
            Self::ForgotPassword => "Recuperar senha",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteTarget {
    /// In-app path to navigate to instead.
    Redirect(&'static str),
    Render(View),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct RouteDefinition {
    pub path: &'static str,
    /// Identifier for symbolic navigation.
    pub name: Option<&'static str>,
    pub target: RouteTarget,
}

impl RouteDefinition {
    pub fn view(&self) -> Option<View> {
        match self.target {
            RouteTarget::Render(view) => Some(view),
            RouteTarget::Redirect(_) => None,
        }
    }
}

pub static ROUTES: &[RouteDefinition] = &[
    RouteDefinition {
        path: HOME,
        name: None,
        target: RouteTarget::Redirect(LOGIN),
    },
    RouteDefinition {
        path: REGISTER,
        name: Some("register"),
        target: RouteTarget::Render(View::Register),
    },
    RouteDefinition {
        path: LOGIN,
        name: Some("login"),
        target: RouteTarget::Render(View::Login),
    },
    RouteDefinition {
        path: FORGOT_PASSWORD,
        name: Some("forgot-password"),
        target: RouteTarget::Render(View::ForgotPassword),
    },
];

/// Checks whether an in-app `path` matches the route `pattern`.
///
/// Matching is case-insensitive and tolerates a single trailing slash on the
/// path. Query string and fragment are not part of the path and must be
/// stripped beforehand.
pub fn matches(pattern: &str, path: &str) -> bool {
    let path = match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    };
    pattern.eq_ignore_ascii_case(path)
}

/// First entry of `table` matching `path`.
pub fn find<'t>(table: &'t [RouteDefinition], path: &str) -> Option<&'t RouteDefinition> {
    table.iter().find(|route| matches(route.path, path))
}

pub fn by_name<'t>(table: &'t [RouteDefinition], name: &str) -> Option<&'t RouteDefinition> {
    table.iter().find(|route| route.name == Some(name))
}

/// Checks internal consistency of a route table.
pub fn validate(table: &[RouteDefinition]) -> Result<()> {
    let mut paths = HashSet::new();
    let mut names = HashSet::new();

    for route in table {
        if !route.path.starts_with('/') {
            return Err(ErrorKind::InvalidRouteTable(format!(
                "path must start with '/': {}",
                route.path
            ))
            .into());
        }
        if !paths.insert(route.path.to_ascii_lowercase()) {
            return Err(
                ErrorKind::InvalidRouteTable(format!("duplicate path: {}", route.path)).into(),
            );
        }
        if let Some(name) = route.name {
            if !names.insert(name) {
                return Err(
                    ErrorKind::InvalidRouteTable(format!("duplicate name: {name}")).into(),
                );
            }
        }
    }

    for route in table {
        if let RouteTarget::Redirect(target) = route.target {
            if find(table, target).is_none() {
                return Err(ErrorKind::InvalidRouteTable(format!(
                    "redirect from {} points at undefined path {}",
                    route.path, target
                ))
                .into());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_valid() {
        validate(ROUTES).unwrap();
    }

    #[test]
    fn root_redirects_to_login() {
        let route = find(ROUTES, "/").unwrap();
        assert_eq!(route.target, RouteTarget::Redirect("/login"));
        assert_eq!(route.name, None);
    }

    #[test]
    fn each_path_matched_by_exactly_one_entry() {
        for route in ROUTES {
            let count = ROUTES.iter().filter(|r| matches(r.path, route.path)).count();
            assert_eq!(count, 1, "{}", route.path);
        }
    }

    #[test]
    fn forgot_password_renders_recovery_view() {
        let route = find(ROUTES, "/forgot-password").unwrap();
        assert_eq!(route.view(), Some(View::ForgotPassword));
        assert_eq!(by_name(ROUTES, "forgot-password"), Some(route));
    }

    #[test]
    fn unknown_path_has_no_entry() {
        assert!(find(ROUTES, "/unknown").is_none());
    }

    #[test]
    fn matching_tolerates_case_and_trailing_slash() {
        assert!(matches("/login", "/login/"));
        assert!(matches("/login", "/LOGIN"));
        assert!(matches("/", "/"));
        assert!(!matches("/login", "/login//"));
        assert!(!matches("/login", "/log"));
    }

    #[test]
    fn validate_rejects_broken_tables() {
        let dangling = [RouteDefinition {
            path: "/",
            name: None,
            target: RouteTarget::Redirect("/nowhere"),
        }];
        assert!(validate(&dangling).is_err());

        let duplicate = [
            RouteDefinition {
                path: "/login",
                name: Some("login"),
                target: RouteTarget::Render(View::Login),
            },
            RouteDefinition {
                path: "/Login",
                name: Some("other"),
                target: RouteTarget::Render(View::Register),
            },
        ];
        let err = validate(&duplicate).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidRouteTable(_)));

        let relative = [RouteDefinition {
            path: "login",
            name: None,
            target: RouteTarget::Render(View::Login),
        }];
        assert!(validate(&relative).is_err());

        let same_name = [
            RouteDefinition {
                path: "/login",
                name: Some("login"),
                target: RouteTarget::Render(View::Login),
            },
            RouteDefinition {
                path: "/entrar",
                name: Some("login"),
                target: RouteTarget::Render(View::Login),
            },
        ];
        let err = validate(&same_name).unwrap_err();
        assert!(matches!(
            err.kind,
            ErrorKind::InvalidRouteTable(ref m) if m.contains("duplicate name")
        ));
    }

    #[test]
    fn view_ids() {
        assert_eq!(View::ForgotPassword.id(), "forgot-password");
        assert_eq!(View::Login.to_string(), "login");
    }
}
