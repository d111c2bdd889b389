//! Forms for the account and rep maintenance actions.

use serde::Deserialize;
use validator::Validate;

use crate::forms::FormError;

/// Password change request as submitted by the settings screen.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordForm {
    #[serde(default)]
    pub current_password: String,
    #[serde(default)]
    #[validate(length(min = 6, message = "too short"))]
    pub new_password: String,
    #[serde(default)]
    #[validate(must_match(other = "new_password", message = "mismatch"))]
    pub confirm_password: String,
}

/// Validated password change.
#[derive(Debug, PartialEq, Eq)]
pub struct ChangePasswordPayload {
    pub current_password: String,
    pub new_password: String,
}

impl TryFrom<ChangePasswordForm> for ChangePasswordPayload {
    type Error = FormError;

    fn try_from(form: ChangePasswordForm) -> Result<Self, Self::Error> {
        if form.current_password.is_empty()
            || form.new_password.is_empty()
            || form.confirm_password.is_empty()
        {
            return Err(FormError::MissingPasswordFields);
        }

        form.validate().map_err(|errors| {
            if errors.field_errors().contains_key("confirm_password") {
                FormError::PasswordMismatch
            } else {
                FormError::PasswordTooShort
            }
        })?;

        if form.new_password == form.current_password {
            return Err(FormError::PasswordUnchanged);
        }

        Ok(Self {
            current_password: form.current_password,
            new_password: form.new_password,
        })
    }
}

/// Request to fold every sale of one rep into another.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MergeRepsForm {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub from_rep: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub to_rep: String,
}

#[derive(Debug, PartialEq, Eq)]
pub struct MergeRepsPayload {
    pub from_rep: String,
    pub to_rep: String,
}

impl TryFrom<MergeRepsForm> for MergeRepsPayload {
    type Error = FormError;

    fn try_from(form: MergeRepsForm) -> Result<Self, Self::Error> {
        let form = MergeRepsForm {
            from_rep: form.from_rep.trim().to_string(),
            to_rep: form.to_rep.trim().to_string(),
        };
        form.validate().map_err(|_| FormError::MissingRep)?;

        if form.from_rep == form.to_rep {
            return Err(FormError::SameRep);
        }

        Ok(Self {
            from_rep: form.from_rep,
            to_rep: form.to_rep,
        })
    }
}
