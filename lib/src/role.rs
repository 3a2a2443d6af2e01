//! Closed set of user roles and the options offered by role-selection
//! controls.
//!
//! # Selectable roles
//!
//! Only roles listed in [`ROLE_OPTIONS`] can be picked through the generic
//! selection control (e.g. the registration form). `admin` is deliberately
//! left out; administrative role assignment happens elsewhere. Values coming
//! back from such a control should go through [`parse_selectable`].

use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::error::{ErrorKind, Result};

/// Permission tier of a user within the application.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// Reader, new accounts start here.
    #[default]
    Leitor,
    Professor,
    Bolsista,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Presentation entry for this role, if the role is selectable.
    pub fn option(&self) -> Option<&'static RoleOption> {
        ROLE_OPTIONS.iter().find(|o| o.value == *self)
    }

    pub fn is_selectable(&self) -> bool {
        self.option().is_some()
    }

    /// Whether the role may publish news.
    pub fn can_publish(&self) -> bool {
        !matches!(self, Role::Leitor)
    }

    /// Whether the role may manage categories and other users' content.
    pub fn can_manage(&self) -> bool {
        matches!(self, Role::Professor | Role::Admin)
    }

    /// Every role, selectable or not.
    pub fn all() -> Vec<Role> {
        Role::iter().collect()
    }
}

/// Role paired with the label shown in a selection control.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct RoleOption {
    pub value: Role,
    pub label: &'static str,
}

pub static ROLE_OPTIONS: [RoleOption; 3] = [
    RoleOption {
        value: Role::Leitor,
        label: "Leitor (Acesso a notícias)",
    },
    RoleOption {
        value: Role::Professor,
        label: "Professor (Publicação/Gerenciamento)",
    },
    RoleOption {
        value: Role::Bolsista,
        label: "Bolsista (Publicação de notícias)",
    },
];

/// Parses a role value submitted through a selection control.
///
/// Unknown values and roles missing from [`ROLE_OPTIONS`] are rejected, so a
/// crafted submission can't smuggle in `admin`.
pub fn parse_selectable(input: &str) -> Result<Role> {
    let role = Role::from_str(input.trim())
        .map_err(|_| ErrorKind::UnknownRole(input.to_string()))?;
    if !role.is_selectable() {
        log::debug!("rejected non-selectable role submission: {role}");
        return Err(ErrorKind::RoleNotSelectable(role).into());
    }
    Ok(role)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn enumeration_is_exactly_four_roles() {
        let set: HashSet<&str> = Role::iter().map(|r| r.as_str()).collect();
        let expected: HashSet<&str> = ["leitor", "professor", "bolsista", "admin"].into();
        assert_eq!(set, expected);
    }

    #[test]
    fn options_exclude_admin() {
        assert_eq!(ROLE_OPTIONS.len(), 3);
        assert!(ROLE_OPTIONS.iter().all(|o| o.value != Role::Admin));
        assert!(!Role::Admin.is_selectable());
        assert!(Role::Admin.option().is_none());
    }

    #[test]
    fn options_keep_order_and_labels() {
        let pairs: Vec<(&str, &str)> = ROLE_OPTIONS
            .iter()
            .map(|o| (o.value.as_str(), o.label))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("leitor", "Leitor (Acesso a notícias)"),
                ("professor", "Professor (Publicação/Gerenciamento)"),
                ("bolsista", "Bolsista (Publicação de notícias)"),
            ]
        );
    }

    #[test]
    fn string_encoding() {
        assert_eq!(Role::Bolsista.to_string(), "bolsista");
        assert_eq!(Role::from_str("professor").unwrap(), Role::Professor);
        assert!(Role::from_str("Professor").is_err());
        assert_eq!(
            serde_json::to_string(&Role::Admin).unwrap(),
            "\"admin\"".to_string()
        );
        let role: Role = serde_json::from_str("\"leitor\"").unwrap();
        assert_eq!(role, Role::Leitor);
        assert_eq!(Role::default(), Role::Leitor);
    }

    #[test]
    fn capabilities() {
        let publishers: Vec<Role> = Role::iter().filter(Role::can_publish).collect();
        assert_eq!(publishers, vec![Role::Professor, Role::Bolsista, Role::Admin]);
        let managers: Vec<Role> = Role::iter().filter(Role::can_manage).collect();
        assert_eq!(managers, vec![Role::Professor, Role::Admin]);
    }

    #[test]
    fn parse_selectable_rejects_admin_and_unknown() {
        assert_eq!(parse_selectable("bolsista").unwrap(), Role::Bolsista);
        assert_eq!(parse_selectable(" leitor ").unwrap(), Role::Leitor);

        let err = parse_selectable("admin").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::RoleNotSelectable(Role::Admin)));

        let err = parse_selectable("editor").unwrap_err();
        assert!(matches!(err.kind, ErrorKind::UnknownRole(ref s) if s == "editor"));
    }
}
