use std::backtrace::Backtrace;
use std::fmt::{Display, Formatter};

use crate::role::Role;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub backtrace: Backtrace,
}

impl std::error::Error for Error {}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            backtrace: Backtrace::capture(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        if self.backtrace.status() == std::backtrace::BacktraceStatus::Captured {
            write!(f, ", {}", self.backtrace)?;
        }
        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ErrorKind {
    #[error("unexpected error")]
    StdIoError(#[from] std::io::Error),

    #[error("config error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("failed parsing value from string: {0}")]
    ParsingError(String),

    #[error("other error: {0}")]
    Other(String),

    #[error("bad input: {0}")]
    BadInput(String),

    /// Location didn't match any entry of the installed route table.
    #[error("no route matches path: {0}")]
    RouteNotFound(String),
    #[error("no route named: {0}")]
    UnknownRouteName(String),
    #[error("redirect loop starting at: {0}")]
    RedirectLoop(String),
    #[error("invalid route table: {0}")]
    InvalidRouteTable(String),
    #[error("navigator already installed")]
    NavigatorAlreadyInstalled,

    #[error("unknown role: {0}")]
    UnknownRole(String),
    /// Role exists but is not offered for selection, e.g. `admin`.
    #[error("role not selectable: {0}")]
    RoleNotSelectable(Role),

    #[cfg(feature = "askama")]
    #[error("template render error: {0}")]
    TemplateError(#[from] askama::Error),
}

#[cfg(feature = "askama")]
impl From<askama::Error> for Error {
    fn from(e: askama::Error) -> Self {
        Self::new(ErrorKind::TemplateError(e))
    }
}

impl From<config::ConfigError> for Error {
    fn from(e: config::ConfigError) -> Self {
        Self::new(ErrorKind::ConfigError(e))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::new(ErrorKind::StdIoError(e))
    }
}

impl From<ErrorKind> for Error {
    fn from(k: ErrorKind) -> Self {
        Self::new(k)
    }
}
