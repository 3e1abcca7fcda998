//! Custom Yew hooks for the frontend application.

mod use_app_context;

pub use use_app_context::{use_app_context, AppContext};
