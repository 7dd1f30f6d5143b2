use auraflow_sdk::ApiError;
use thiserror::Error;

/// Reasons a workflow definition is rejected before it is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DefinitionError {
    #[error("at least one step is required")]
    NoSteps,

    #[error("workflow must have exactly one START step, found {0}")]
    StartSteps(usize),

    #[error("workflow must have at least one END step")]
    NoEndStep,

    #[error("duplicate step client id '{0}'")]
    DuplicateClientId(String),

    #[error("transition starts at unknown step '{0}'")]
    UnknownSource(String),

    #[error("transition ends at unknown step '{0}'")]
    UnknownTarget(String),
}

/// Surfaces as `ApiError::InvalidRequest`
impl From<DefinitionError> for ApiError {
    fn from(err: DefinitionError) -> Self {
        ApiError::InvalidRequest(format!("invalid workflow definition: {err}"))
    }
}
