use serde::Serialize;

/// Reply to a settings mutation.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsActionData {
    pub success: bool,
    pub message: Option<String>,
    /// Records loaded by the refresh that follows a merge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refreshed_records: Option<usize>,
}

/// Reply to a manual refresh.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RefreshData {
    pub record_count: usize,
}
