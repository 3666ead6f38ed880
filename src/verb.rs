use axum::handler::Handler;
use axum::routing::{self, MethodFilter, MethodRouter};
use strum_macros::Display;

/// HTTP verb a [`Route`](crate::Route) is registered under.
///
/// The default value is [`Verb::Unset`], meaning "do not register"; the
/// registrar skips such routes and records them in the report instead of
/// failing the whole pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Verb {
    /// No verb declared; the route is skipped at registration time.
    #[default]
    Unset,
    Get,
    Delete,
    Put,
    Patch,
    Post,
    Options,
    /// Matches every HTTP method.
    Any,
    Head,
}

impl Verb {
    /// Single verb-to-registration mapping shared by both registration
    /// entry points. Returns `None` for [`Verb::Unset`].
    pub(crate) fn method_router<H, T, S>(self, handler: H) -> Option<MethodRouter<S>>
    where
        H: Handler<T, S>,
        T: 'static,
        S: Clone + Send + Sync + 'static,
    {
        let filter = match self {
            Verb::Get => MethodFilter::GET,
            Verb::Delete => MethodFilter::DELETE,
            Verb::Put => MethodFilter::PUT,
            Verb::Patch => MethodFilter::PATCH,
            Verb::Post => MethodFilter::POST,
            Verb::Options => MethodFilter::OPTIONS,
            Verb::Head => MethodFilter::HEAD,
            Verb::Any => return Some(routing::any(handler)),
            Verb::Unset => return None,
        };
        Some(routing::on(filter, handler))
    }

    /// Whether two verbs on the same path collide. [`Verb::Any`] overlaps
    /// with everything, which axum rejects with a panic, so the registrar
    /// treats the overlap as a duplicate and skips it.
    pub(crate) fn conflicts_with(self, other: Verb) -> bool {
        self == other || self == Verb::Any || other == Verb::Any
    }
}
