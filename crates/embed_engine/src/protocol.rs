use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Source tag stamped on every outbound envelope. This and
/// [`METADATA_TYPE`] are the compatibility contract with the parent
/// application's listener and must not change.
pub const MESSAGE_SOURCE: &str = "opsfolio-sqlpage";

/// Type tag of the one outbound message kind.
pub const METADATA_TYPE: &str = "ui-metadata";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbEntry {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UiMetadataPayload {
    /// Serializes as JSON `null` when no title was found; the field is
    /// always present on the wire.
    #[serde(rename = "pageTitle")]
    pub page_title: Option<String>,
    pub breadcrumbs: Vec<BreadcrumbEntry>,
}

/// The outbound handoff message, sent exactly once per page load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataEnvelope {
    pub source: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub payload: UiMetadataPayload,
}

impl MetadataEnvelope {
    pub fn new(payload: UiMetadataPayload) -> Self {
        Self {
            source: MESSAGE_SOURCE.to_string(),
            kind: METADATA_TYPE.to_string(),
            payload,
        }
    }
}

/// Commands the parent application may issue to this window, discriminated
/// by the `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum ParentCommand {
    /// Navigate the iframe back to its home document.
    #[serde(rename = "navigate-home")]
    NavigateHome { href: String },
    /// Hide the in-page title; the parent controls the layout.
    #[serde(rename = "hide-internal-title")]
    HideInternalTitle,
}

/// Decodes inbound cross-window traffic.
///
/// Anything unrecognized decodes to `None` and is ignored by the caller;
/// inbound traffic never produces an error. A `navigate-home` without a
/// usable destination counts as unrecognized.
pub fn decode_parent_command(data: &Value) -> Option<ParentCommand> {
    let command = serde_json::from_value::<ParentCommand>(data.clone()).ok()?;
    match &command {
        ParentCommand::NavigateHome { href } if href.is_empty() => None,
        _ => Some(command),
    }
}
