//! Services coordinating the remote settings actions.

use crate::dto::settings::SettingsActionData;
use crate::feed::SalesFeed;
use crate::forms::settings::{
    ChangePasswordForm, ChangePasswordPayload, MergeRepsForm, MergeRepsPayload,
};
use crate::services::ServiceResult;
use crate::settings_client::SettingsGateway;

/// Validates the form locally, then forwards the change to the settings function.
pub async fn change_password<G>(
    gateway: &G,
    form: ChangePasswordForm,
) -> ServiceResult<SettingsActionData>
where
    G: SettingsGateway + ?Sized,
{
    let payload = ChangePasswordPayload::try_from(form)?;

    let confirmation = gateway
        .update_password(&payload.current_password, &payload.new_password)
        .await
        .map_err(|err| {
            log::error!("Failed to update password: {err}");
            err
        })?;

    Ok(SettingsActionData {
        success: confirmation.success,
        message: confirmation.message,
        refreshed_records: None,
    })
}

/// Moves every sale of one rep to another and reloads the sheet.
///
/// The merge itself is authoritative: if the follow-up refresh fails the
/// action still succeeds and the feed keeps reporting the fetch error.
pub async fn merge_reps<G>(
    gateway: &G,
    feed: &SalesFeed,
    form: MergeRepsForm,
) -> ServiceResult<SettingsActionData>
where
    G: SettingsGateway + ?Sized,
{
    let payload = MergeRepsPayload::try_from(form)?;

    let confirmation = gateway
        .merge_reps(&payload.from_rep, &payload.to_rep)
        .await
        .map_err(|err| {
            log::error!(
                "Failed to merge rep {} into {}: {err}",
                payload.from_rep,
                payload.to_rep
            );
            err
        })?;
    log::info!("Merged rep {} into {}", payload.from_rep, payload.to_rep);

    let refreshed_records = match feed.refresh().await {
        Ok(count) => Some(count),
        Err(err) => {
            log::warn!("Refresh after merge failed: {err}");
            None
        }
    };

    Ok(SettingsActionData {
        success: confirmation.success,
        message: confirmation.message,
        refreshed_records,
    })
}
