use std::collections::HashMap;
use std::mem;

use axum::Router;
use tracing::{debug, warn};

use crate::controller::Controller;
use crate::report::{Registered, Report, SkipReason, Skipped};
use crate::route::Route;
use crate::verb::Verb;

/// Registers controller route tables onto an [`axum::Router`].
///
/// The registrar owns a router that successive [`Registrar::register`] calls
/// build up; [`Registrar::into_router`] hands the finished router back for
/// serving. [`Registrar::register_into`] instead targets a caller-supplied
/// router, so the same controller type can be mounted under several
/// prefixes.
///
/// Registration never fails: routes with an unset verb or a colliding
/// (path, verb) pair are skipped, logged, and reported. Registration is a
/// single synchronous pass meant to run once during startup.
pub struct Registrar<S = ()> {
    router: Router<S>,
    claimed: HashMap<String, Vec<Verb>>,
}

impl<S> Registrar<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self::with_router(Router::new())
    }

    /// Start from an existing router.
    ///
    /// Routes already present on it are not visible to duplicate detection;
    /// only routes added through this registrar are tracked.
    pub fn with_router(router: Router<S>) -> Self {
        Self {
            router,
            claimed: HashMap::new(),
        }
    }

    pub fn router(&self) -> &Router<S> {
        &self.router
    }

    /// Replace the stored router and reset duplicate tracking.
    pub fn set_router(&mut self, router: Router<S>) {
        self.router = router;
        self.claimed.clear();
    }

    pub fn into_router(self) -> Router<S> {
        self.router
    }

    /// Register a controller's routes on the stored router.
    pub fn register<C>(&mut self, controller: &C) -> Report
    where
        C: Controller<S> + ?Sized,
    {
        let router = mem::take(&mut self.router);
        let (router, report) = apply(controller.routes(), router, &mut self.claimed);
        self.router = router;
        report
    }

    /// Register a controller's routes on a caller-supplied router.
    ///
    /// Duplicate tracking is scoped to this single pass.
    pub fn register_into<C>(controller: &C, router: Router<S>) -> (Router<S>, Report)
    where
        C: Controller<S> + ?Sized,
    {
        let mut claimed = HashMap::new();
        apply(controller.routes(), router, &mut claimed)
    }
}

impl<S> Default for Registrar<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Shared registration pass. Route order is the controller's declaration
/// order; there is no reordering or retry.
fn apply<S>(
    routes: Vec<Route<S>>,
    mut router: Router<S>,
    claimed: &mut HashMap<String, Vec<Verb>>,
) -> (Router<S>, Report)
where
    S: Clone + Send + Sync + 'static,
{
    let mut report = Report::default();

    for route in routes {
        let (name, verb, path, endpoint) = route.into_parts();

        let Some(endpoint) = endpoint else {
            warn!(route = %name, "no http verb declared, skipping route");
            report.skipped.push(Skipped {
                name,
                reason: SkipReason::UnsetVerb,
            });
            continue;
        };

        let taken = claimed.entry(path.clone()).or_default();
        if taken.iter().any(|&t| verb.conflicts_with(t)) {
            warn!(route = %name, %verb, %path, "route already registered, skipping");
            report.skipped.push(Skipped {
                name,
                reason: SkipReason::DuplicateRoute { verb, path },
            });
            continue;
        }
        taken.push(verb);

        router = router.route(&path, endpoint);
        debug!(route = %name, %verb, %path, "route registered");
        report.registered.push(Registered { name, verb, path });
    }

    (router, report)
}
