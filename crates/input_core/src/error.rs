/// Failure to obtain the navigation API from the primary context.
///
/// There is no fallback path: a remote window without the API cannot do
/// anything, so hosts surface this and stop.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("no opener context: this window was not opened by a presentation")]
    OpenerMissing,
    #[error("opener does not expose the navigation API factory `{0}`")]
    FactoryMissing(String),
    #[error("navigation API factory failed: {0}")]
    FactoryFailed(String),
    #[error("navigation API does not provide `{0}`")]
    OperationMissing(&'static str),
    #[error("primary context is gone")]
    Disconnected,
}
