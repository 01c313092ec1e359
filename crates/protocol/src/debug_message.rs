use serde::{Deserialize, Deserializer, Serialize};
use serde_json::value::RawValue;

use crate::severity::Severity;

/// A single debug message pushed by the server over a debug socket.
///
/// `data` is kept as raw JSON so the renderer sees the payload exactly as
/// the server sent it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugMessage {
    pub severity: Severity,
    pub message: String,
    #[serde(
        default,
        deserialize_with = "present_raw",
        skip_serializing_if = "Option::is_none"
    )]
    pub data: Option<Box<RawValue>>,
}

impl DebugMessage {
    /// Returns the raw payload text, or `""` when there is none.
    ///
    /// An explicit `"data": null` yields `"null"`.
    pub fn data_str(&self) -> &str {
        self.data.as_deref().map(RawValue::get).unwrap_or("")
    }
}

/// Keeps a present `data` field verbatim, `null` included.
fn present_raw<'de, D>(deserializer: D) -> Result<Option<Box<RawValue>>, D::Error>
where
    D: Deserializer<'de>,
{
    Box::<RawValue>::deserialize(deserializer).map(Some)
}
