use std::convert::Infallible;

use axum::extract::Request;
use axum::handler::Handler;
use axum::response::IntoResponse;
use axum::routing::{MethodRouter, Route as RouteService};
use tower::{Layer, Service};

use crate::naming::to_snake_case;
use crate::verb::Verb;

/// One entry in a controller's route table: a verb, a handler chain, and the
/// camelCase name the default path is derived from.
///
/// Middleware is attached with [`Route::layer`]; the terminal handler is the
/// one given at construction. An explicit path set with [`Route::path`]
/// replaces the name-derived one and is used verbatim, without case
/// conversion.
///
/// # Example
/// ```
/// use rostra::{Route, Verb};
///
/// let route: Route = Route::get("GetUserData", || async { "user data" });
/// assert_eq!(route.verb(), Verb::Get);
/// ```
pub struct Route<S = ()> {
    name: String,
    verb: Verb,
    path: Option<String>,
    endpoint: Option<MethodRouter<S>>,
}

impl<S> Route<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Create a route for an arbitrary [`Verb`]. With [`Verb::Unset`] the
    /// route is a declared no-op that the registrar skips.
    pub fn new<H, T>(verb: Verb, name: impl Into<String>, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        Self {
            name: name.into(),
            verb,
            path: None,
            endpoint: verb.method_router(handler),
        }
    }

    pub fn get<H, T>(name: impl Into<String>, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        Self::new(Verb::Get, name, handler)
    }

    pub fn delete<H, T>(name: impl Into<String>, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        Self::new(Verb::Delete, name, handler)
    }

    pub fn put<H, T>(name: impl Into<String>, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        Self::new(Verb::Put, name, handler)
    }

    pub fn patch<H, T>(name: impl Into<String>, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        Self::new(Verb::Patch, name, handler)
    }

    pub fn post<H, T>(name: impl Into<String>, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        Self::new(Verb::Post, name, handler)
    }

    pub fn options<H, T>(name: impl Into<String>, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        Self::new(Verb::Options, name, handler)
    }

    /// Route matching every HTTP method.
    pub fn any<H, T>(name: impl Into<String>, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        Self::new(Verb::Any, name, handler)
    }

    pub fn head<H, T>(name: impl Into<String>, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        Self::new(Verb::Head, name, handler)
    }

    /// Override the name-derived path. The override is used as given (a
    /// leading `/` is added when missing) and is never snake-cased.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach a middleware layer to this route's handler chain. Layers wrap
    /// the handler in the order they are added, so the last added layer runs
    /// first on the way in.
    pub fn layer<L>(mut self, layer: L) -> Self
    where
        L: Layer<RouteService> + Clone + Send + Sync + 'static,
        L::Service: Service<Request, Error = Infallible> + Clone + Send + Sync + 'static,
        <L::Service as Service<Request>>::Response: IntoResponse + 'static,
        <L::Service as Service<Request>>::Future: Send + 'static,
    {
        self.endpoint = self.endpoint.map(|endpoint| endpoint.layer(layer));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn verb(&self) -> Verb {
        self.verb
    }

    pub(crate) fn into_parts(self) -> (String, Verb, String, Option<MethodRouter<S>>) {
        let path = match &self.path {
            Some(p) if p.starts_with('/') => p.clone(),
            Some(p) => format!("/{p}"),
            None => format!("/{}", to_snake_case(&self.name)),
        };
        (self.name, self.verb, path, self.endpoint)
    }
}
