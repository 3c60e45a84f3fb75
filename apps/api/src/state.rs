use crate::config::Config;
use crate::feedback::FeedbackComposer;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is read-only after startup; requests share it without
/// locking.
#[derive(Clone)]
pub struct AppState {
    /// Kept for handlers that need runtime settings; currently only read at
    /// startup.
    #[allow(dead_code)]
    pub config: Config,
    /// Feedback composer holding the optional remote generator. Built once at
    /// startup from the configured credential.
    pub composer: FeedbackComposer,
}
