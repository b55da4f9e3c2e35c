use serde::Deserialize;

/// Reply of the sprint existence check
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExistsResponse {
    pub exists: bool,
}

/// Reply of the sprint and task save endpoints.
///
/// Servers may also send a `message`; the success alert text is fixed, so it
/// is not read.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SaveResponse {
    pub success: bool,
    pub error: Option<String>,
}
