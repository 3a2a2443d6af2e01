//! Navigation routes and role registry for the Jornal front end.
//!
//! The crate provides the route table and path-based navigation engine, the
//! closed set of user roles along with the options offered for selection,
//! and an `axum` shell serving the navigation under a configurable base path.

#[macro_use]
extern crate serde_derive;

pub mod config;
pub mod error;
pub mod navigation;
pub mod role;
pub mod routes;
pub mod tracing;

#[cfg(feature = "axum")]
pub mod axum;

pub use crate::config::Config;
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::navigation::{History, Navigator, Resolution};
pub use crate::role::{Role, RoleOption, ROLE_OPTIONS};
pub use crate::routes::{RouteDefinition, RouteTarget, View, ROUTES};
