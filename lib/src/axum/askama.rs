use axum::response::{Html, IntoResponse, Response};

use crate::role::RoleOption;
use crate::Error;

/// Wrapper rendering any askama template into an html response.
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: ::askama::Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(e) => Error::from(e).into_response(),
        }
    }
}

/// Page shell mounting a single view.
#[derive(::askama::Template)]
#[template(
    ext = "html",
    source = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<base href="{{ base }}">
<title>{{ title }} | {{ app }}</title>
</head>
<body>
<main id="app" data-view="{{ view }}" data-path="{{ path }}">
{%- if !roles.is_empty() %}
<select name="role">
{%- for option in roles %}
<option value="{{ option.value }}">{{ option.label }}</option>
{%- endfor %}
</select>
{%- endif %}
</main>
</body>
</html>
"#
)]
pub struct Shell {
    pub app: String,
    pub base: String,
    pub title: &'static str,
    /// Identifier of the mounted view.
    pub view: &'static str,
    /// In-app path the view was resolved from.
    pub path: String,
    /// Options for the role-selection control, empty when the view has none.
    pub roles: Vec<RoleOption>,
}
