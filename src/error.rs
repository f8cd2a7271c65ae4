use thiserror::Error;

/// Errors raised while wiring up reactive sources.
///
/// Commands on the view model never fail; only construction does.
#[derive(Debug, Error)]
pub enum FlowError {
    /// The view model spawns its collectors onto the ambient tokio runtime.
    #[error("No tokio runtime available: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}
