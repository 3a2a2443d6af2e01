use axum::response::{Html, IntoResponse, Response};
use http::StatusCode;

use crate::{Error, ErrorKind};

/// Implements conversion into html response for all possible error variants.
///
/// # Error message stripping in production
///
/// When compiled with optimizations ("release mode"), internal error
/// responses carry no details. Backtraces are never part of the response and
/// are only available through the application logs.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match &self.kind {
            ErrorKind::RouteNotFound(path) => {
                tracing::debug!("no route for {path}");
                (StatusCode::NOT_FOUND, Html(self.kind.to_string())).into_response()
            }
            ErrorKind::BadInput(_)
            | ErrorKind::UnknownRole(_)
            | ErrorKind::RoleNotSelectable(_) => {
                tracing::trace!("{}", self);
                (StatusCode::BAD_REQUEST, Html(self.kind.to_string())).into_response()
            }
            _ => {
                tracing::error!("{}", self);
                let body = if cfg!(debug_assertions) {
                    self.kind.to_string()
                } else {
                    String::new()
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    #[test]
    fn status_codes() {
        let res = Error::from(ErrorKind::RouteNotFound("/x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let res = Error::from(ErrorKind::RoleNotSelectable(Role::Admin)).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let res = Error::from(ErrorKind::RedirectLoop("/a".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
