//! "luni" record scanning: walk the tagged records of an additional-info block
//! and decode the Unicode layer name.

use crate::info::{AdditionalInfo, RecordSummary};
use crate::psd::parser::{read_u32_be, Records};

/// Key of the Unicode layer name record (matched case-insensitively).
const LUNI_KEY: &[u8; 4] = b"luni";

/// Decode a "luni" payload: `CharCount(u32 BE)` then `CharCount * 2` bytes of
/// UTF-16 big-endian text, no terminator. Returns `None` if the declared
/// character count does not fit the payload.
fn decode_layer_name(payload: &[u8]) -> Option<String> {
    let char_count = read_u32_be(payload, 0)?;
    // u64 math so a huge count cannot wrap into a small byte count.
    let byte_count = char_count as u64 * 2;
    if byte_count + 4 > payload.len() as u64 {
        return None;
    }
    let text = &payload[4..4 + byte_count as usize];
    let units: Vec<u16> = text
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect();
    Some(String::from_utf16_lossy(&units))
}

/// Scan an additional-info block for the first "luni" record and decode the
/// layer name it carries.
///
/// Safe on any input, including empty, truncated or adversarial buffers: all
/// malformed cases degrade to `None`, nothing is ever read out of bounds, and
/// the caller's buffer is never modified. Only the first "luni" record is
/// consulted; if its length field is malformed the scan stops with `None`.
pub fn scan_additional_info(bytes: &[u8]) -> Option<AdditionalInfo> {
    for record in Records::new(bytes) {
        if record.key.eq_ignore_ascii_case(LUNI_KEY) {
            return decode_layer_name(record.payload).map(AdditionalInfo::new);
        }
    }
    None
}

/// List the records of an additional-info block (key, size, offset) without
/// decoding any payload. Same bounds policy as [`scan_additional_info`]:
/// enumeration stops at the first truncated record.
pub fn list_records(bytes: &[u8]) -> Vec<RecordSummary> {
    Records::new(bytes)
        .map(|r| RecordSummary {
            offset: r.offset,
            signature: String::from_utf8_lossy(&r.signature).into_owned(),
            key: String::from_utf8_lossy(&r.key).into_owned(),
            size: r.size,
        })
        .collect()
}
