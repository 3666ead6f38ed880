use crate::route::Route;

/// Implemented by controller types to declare their route table.
///
/// This is the statically-typed registration surface: instead of the
/// registrar discovering handler methods at runtime, a controller returns
/// its routes as data and the compiler checks every entry.
///
/// # Example
/// ```
/// use rostra::{Controller, Route};
///
/// struct UserController;
///
/// impl Controller for UserController {
///     fn routes(&self) -> Vec<Route> {
///         vec![
///             Route::get("GetUserData", || async { "user data" }),
///             Route::post("CreateUser", || async { "created" }),
///         ]
///     }
/// }
/// ```
pub trait Controller<S = ()>
where
    S: Clone + Send + Sync + 'static,
{
    /// The routes this controller exposes, in registration order.
    fn routes(&self) -> Vec<Route<S>>;
}
