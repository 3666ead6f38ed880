//! # Rostra
//!
//! Trait-based controller route registration for Axum.
//!
//! A controller declares its routes as data: each entry carries an HTTP
//! verb, a handler chain, and a camelCase name that is converted to a
//! snake_case path (`GetUserData` becomes `/get_user_data`) unless an
//! explicit path overrides it. The [`Registrar`] mounts the whole table on
//! an `axum::Router` in one pass and returns a [`Report`] of what was
//! registered and what was skipped.
//!
//! Registration is best effort: a route with no verb or a colliding path is
//! skipped with a warning and recorded in the report, and the remaining
//! routes still register.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rostra::{Controller, Registrar, Route};
//!
//! struct UserController;
//!
//! impl Controller for UserController {
//!     fn routes(&self) -> Vec<Route> {
//!         vec![
//!             Route::get("GetUserData", || async { "user data" }),
//!             Route::post("CreateUser", || async { "created" }).path("users"),
//!         ]
//!     }
//! }
//!
//! let mut registrar = Registrar::new();
//! let report = registrar.register(&UserController);
//! assert!(report.is_clean());
//!
//! // GET /get_user_data and POST /users are now on the router.
//! let app: rostra::axum::Router = registrar.into_router();
//! ```

pub mod controller;
pub mod naming;
pub mod registrar;
pub mod report;
pub mod route;
pub mod verb;

// Re-export core types
pub use controller::Controller;
pub use naming::to_snake_case;
pub use registrar::Registrar;
pub use report::{Registered, Report, SkipReason, Skipped};
pub use route::Route;
pub use verb::Verb;

// Re-export the underlying web framework
pub use axum;

/// Prelude module for convenient imports
///
/// ```
/// use rostra::prelude::*;
/// ```
pub mod prelude {
    pub use crate::controller::Controller;
    pub use crate::naming::to_snake_case;
    pub use crate::registrar::Registrar;
    pub use crate::report::{Registered, Report, SkipReason, Skipped};
    pub use crate::route::Route;
    pub use crate::verb::Verb;
    pub use axum::{
        Router,
        http::StatusCode,
        response::{IntoResponse, Response},
    };
}
