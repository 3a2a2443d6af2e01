use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Extension;

use crate::axum::askama::{HtmlTemplate, Shell};
use crate::axum::{ConfigExt, NavigatorExt};
use crate::navigation::Resolution;
use crate::role::ROLE_OPTIONS;
use crate::routes::View;
use crate::{ErrorKind, Result};

/// Resolves the requested location against the route table.
///
/// Locations reached through a redirect entry are answered with a redirect
/// to the final location, keeping the query string, so that the browser's
/// address bar reflects the view actually shown.
pub async fn navigate(
    Extension(navigator): NavigatorExt,
    Extension(config): ConfigExt,
    method: Method,
    uri: Uri,
) -> Result<Response> {
    if method != Method::GET && method != Method::HEAD {
        return Err(ErrorKind::RouteNotFound(uri.path().to_string()).into());
    }

    let resolution = navigator.resolve(uri.path())?;

    if resolution.was_redirected() {
        let mut target = navigator.history().href(&resolution.path);
        if let Some(query) = uri.query() {
            target = format!("{target}?{query}");
        }
        tracing::debug!(from = uri.path(), to = %target, "redirecting");
        return Ok(Redirect::to(&target).into_response());
    }

    Ok(HtmlTemplate(shell(
        &config.name,
        navigator.history().base(),
        resolution,
    ))
    .into_response())
}

/// Page shell for a resolved location.
pub fn shell(app: &str, base: &str, resolution: Resolution) -> Shell {
    let roles = match resolution.view {
        View::Register => ROLE_OPTIONS.to_vec(),
        View::Login | View::ForgotPassword => vec![],
    };
    Shell {
        app: app.to_string(),
        base: base.to_string(),
        title: resolution.view.title(),
        view: resolution.view.id(),
        path: resolution.path,
        roles,
    }
}

#[cfg(test)]
mod tests {
    use ::askama::Template;

    use super::*;
    use crate::navigation::{History, Navigator};
    use crate::routes::ROUTES;

    fn render(location: &str) -> String {
        let navigator = Navigator::new(History::new("/"), ROUTES).unwrap();
        let resolution = navigator.resolve(location).unwrap();
        shell("jornal", "/", resolution).render().unwrap()
    }

    #[test]
    fn register_shell_offers_selectable_roles() {
        let html = render("/register");
        assert!(html.contains(r#"data-view="register""#));
        assert!(html.contains(r#"<option value="leitor">Leitor (Acesso a notícias)</option>"#));
        assert!(html.contains(r#"value="professor""#));
        assert!(html.contains(r#"value="bolsista""#));
        assert!(!html.contains(r#"value="admin""#));
    }

    #[test]
    fn login_shell_has_no_role_control() {
        let html = render("/login");
        assert!(html.contains(r#"data-view="login""#));
        assert!(html.contains("<title>Entrar | jornal</title>"));
        assert!(!html.contains("<select"));
    }
}
