//! Structured errors for model selection and parameter validation.

use thiserror::Error;

use crate::kind::ModelKind;

/// Errors raised while selecting a model or building its parameters.
///
/// Every failure mode is caught at the boundary, before any simulation
/// runs, and names the offending model or field.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ModelError {
    /// The requested model name is not one of the supported kinds.
    #[error("unsupported model '{name}': expected one of gbm, heston, ou")]
    UnsupportedModel {
        /// The name as supplied by the caller.
        name: String,
    },

    /// A required parameter was absent from the parameter bag.
    #[error("model '{model}' is missing required parameter '{name}'")]
    MissingParameter {
        /// The model whose parameter set was being assembled.
        model: ModelKind,
        /// The missing field, e.g. `sigma`.
        name: &'static str,
    },

    /// A parameter was present but outside its valid domain.
    #[error("invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        /// The offending field.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Why the value was rejected.
        reason: &'static str,
    },
}
