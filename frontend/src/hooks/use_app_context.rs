//! App-wide context: configuration plus the session derived at startup.

use shared::{AppConfig, Session};
use yew::prelude::*;

/// Provided once by the root component
#[derive(Clone, PartialEq)]
pub struct AppContext {
    pub config: AppConfig,
    pub session: Session,
    /// Replace the session after login or logout
    pub set_session: Callback<Session>,
}

/// Hook for reading the app context.
///
/// Panics if called outside the root `ContextProvider<AppContext>`.
#[hook]
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext not provided")
}
