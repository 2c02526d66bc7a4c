//! Thin HTTP handlers: deserialize, validate, delegate to a service, wrap
//! the result in `ApiResponse`.

pub mod lots;
pub mod production;
pub mod quality;
pub mod reports;
pub mod suppliers;

use validator::Validate;

use crate::errors::ServiceError;

/// Runs `validator` checks on a request body before it reaches a service.
pub(crate) fn validate_input<T: Validate>(input: &T) -> Result<(), ServiceError> {
    input.validate().map_err(ServiceError::from)
}
