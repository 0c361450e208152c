//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use workdeck_domain::WorkdeckError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub WorkdeckError);

impl From<InfraError> for WorkdeckError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<WorkdeckError> for InfraError {
    fn from(value: WorkdeckError) -> Self {
        InfraError(value)
    }
}

trait IntoWorkdeckError {
    fn into_workdeck(self) -> WorkdeckError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → WorkdeckError */
/* -------------------------------------------------------------------------- */

impl IntoWorkdeckError for HttpError {
    fn into_workdeck(self) -> WorkdeckError {
        if self.is_timeout() {
            return WorkdeckError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return WorkdeckError::Network(format!("HTTP connection failure: {self}"));
        }

        if let Some(status) = self.status() {
            return WorkdeckError::Transport {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown status").to_string(),
            };
        }

        if self.is_builder() {
            return WorkdeckError::InvalidInput(format!("invalid HTTP request: {self}"));
        }

        WorkdeckError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_workdeck())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
