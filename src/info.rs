//! Scan result types: the decoded layer name and per-record summaries.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Additional info decoded from a PSD additional-info block.
///
/// Immutable once constructed; only a successful scan produces one. Absent or
/// malformed input yields `None` at the scan site, never a partially built
/// instance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AdditionalInfo {
    layer_name: String,
}

impl AdditionalInfo {
    pub(crate) fn new(layer_name: String) -> Self {
        Self { layer_name }
    }

    /// Name of the layer, decoded from the first "luni" record.
    pub fn layer_name(&self) -> &str {
        &self.layer_name
    }

    /// Consume and return the owned layer name.
    pub fn into_layer_name(self) -> String {
        self.layer_name
    }
}

/// Summary of one tagged record (for reporting; payloads are not decoded).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RecordSummary {
    /// Byte offset of the record within the block.
    pub offset: usize,
    /// 4-byte signature rendered as text (e.g. "8BIM").
    pub signature: String,
    /// 4-byte ASCII key rendered as text (e.g. "luni").
    pub key: String,
    /// Declared payload size in bytes.
    pub size: u32,
}
