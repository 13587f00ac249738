use crate::core::models::domain::DomainError;
use thiserror::Error;

/// Failure of the intensity model.
///
/// The model is pure and deterministic, so the only way it can fail is by being handed a
/// physically meaningless parameter set. Nothing here is transient; callers should report
/// the message instead of retrying.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OpticsError {
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl OpticsError {
    pub(crate) fn non_positive(name: &'static str, value: f64) -> Self {
        OpticsError::InvalidParameter {
            name,
            reason: format!("{} is not a finite, strictly positive length", value),
        }
    }

    pub(crate) fn missing(name: &'static str, mode: &str) -> Self {
        OpticsError::InvalidParameter {
            name,
            reason: format!("required in {} mode but not provided", mode),
        }
    }

    pub(crate) fn overflowing_ratio(name: &'static str, value: f64) -> Self {
        OpticsError::InvalidParameter {
            name,
            reason: format!(
                "ratio to wavelength overflows ({}); the phase cannot be evaluated",
                value
            ),
        }
    }

    pub fn parameter_name(&self) -> &'static str {
        match self {
            OpticsError::InvalidParameter { name, .. } => *name,
        }
    }
}

/// Failure of a workflow run: either the model rejected its parameters or the requested
/// sampling could not be constructed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    Optics(#[from] OpticsError),

    #[error("Invalid sampling: {0}")]
    Domain(#[from] DomainError),
}
