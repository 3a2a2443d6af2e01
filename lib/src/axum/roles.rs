use axum::extract::rejection::FormRejection;
use axum::{Form, Json};

use crate::role::{self, Role, RoleOption, ROLE_OPTIONS};
use crate::{ErrorKind, Result};

/// Lists the options a role-selection control may offer.
pub async fn list() -> Json<&'static [RoleOption]> {
    Json(&ROLE_OPTIONS[..])
}

#[derive(Debug, Deserialize)]
pub struct RoleSelection {
    role: String,
}

/// Checks a value submitted through a role-selection control, answering with
/// the matching option.
pub async fn validate(
    selection: std::result::Result<Form<RoleSelection>, FormRejection>,
) -> Result<Json<RoleOption>> {
    let Form(selection) = selection.map_err(|e| ErrorKind::BadInput(e.body_text()))?;
    let role: Role = role::parse_selectable(&selection.role)?;
    let option = role
        .option()
        .copied()
        .ok_or(ErrorKind::RoleNotSelectable(role))?;
    Ok(Json(option))
}
