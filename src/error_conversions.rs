//! Error conversion glue between the pipeline layers and the service layer.
//!
//! Forms and outbound clients must not depend on service error types, so the
//! conversions live here.

use crate::forms::FormError;
use crate::services::ServiceError;
use crate::settings_client::SettingsError;
use crate::source::FetchError;

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<FetchError> for ServiceError {
    fn from(val: FetchError) -> Self {
        ServiceError::Remote(val.to_string())
    }
}

impl From<SettingsError> for ServiceError {
    fn from(val: SettingsError) -> Self {
        match val {
            SettingsError::InvalidApiKey => ServiceError::Internal(val.to_string()),
            _ => ServiceError::Remote(val.to_string()),
        }
    }
}
