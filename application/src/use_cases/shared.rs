//! Shared pieces used by several use cases

use crate::ports::reasoning_gateway::GatewayError;
use crate::use_cases::run_council::RunCouncilError;
use council_domain::DomainError;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Failure of a single pipeline stage: either the remote call itself, or
/// its reply not matching the expected structured shape. Reply failures
/// are never retried.
#[derive(Error, Debug)]
pub enum StageError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Reply(#[from] DomainError),
}

/// Bail out of the pipeline if the run has been abandoned.
///
/// Checked before every remote call so a reset never leaves an orphaned
/// completion mutating state afterwards.
pub(crate) fn check_cancelled(
    token: &Option<CancellationToken>,
) -> Result<(), RunCouncilError> {
    match token {
        Some(token) if token.is_cancelled() => Err(RunCouncilError::Cancelled),
        _ => Ok(()),
    }
}
