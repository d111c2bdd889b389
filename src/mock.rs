//! Mock implementations of the outbound seams for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::settings_client::{RemoteConfirmation, SettingsGateway, SettingsResult};
use crate::source::{CsvSource, FetchResult};

mock! {
    pub CsvEndpoint {}

    #[async_trait]
    impl CsvSource for CsvEndpoint {
        async fn fetch_csv(&self) -> FetchResult<String>;
    }
}

mock! {
    pub Settings {}

    #[async_trait]
    impl SettingsGateway for Settings {
        async fn update_password(
            &self,
            current_password: &str,
            new_password: &str,
        ) -> SettingsResult<RemoteConfirmation>;
        async fn merge_reps(&self, from_rep: &str, to_rep: &str) -> SettingsResult<RemoteConfirmation>;
    }
}
