//! Minimal parser for the PSD "additional info" block: packed tagged records,
//! each `Signature(4) Key(4 ASCII) Size(u32 BE) Payload(Size)`.
//! See https://www.adobe.com/devnet-apps/photoshop/fileformatashtml/

/// Record signatures used by Photoshop for additional-info records.
pub const SIGNATURE_8BIM: [u8; 4] = *b"8BIM";
pub const SIGNATURE_8B64: [u8; 4] = *b"8B64";

/// Fixed header: 4-byte signature + 4-byte key + 4-byte size.
pub const RECORD_HEADER_LEN: usize = 12;

#[inline]
pub(crate) fn read_u32_be(data: &[u8], offset: usize) -> Option<u32> {
    let end = offset.checked_add(4)?;
    if end > data.len() {
        return None;
    }
    Some(u32::from_be_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]))
}

#[inline]
fn read_tag(data: &[u8], offset: usize) -> Option<[u8; 4]> {
    let end = offset.checked_add(4)?;
    if end > data.len() {
        return None;
    }
    Some([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

/// Check if data looks like an additional-info block: starts with a known
/// record signature and holds at least one full record header.
#[inline]
pub fn is_additional_info(data: &[u8]) -> bool {
    if data.len() < RECORD_HEADER_LEN {
        return false;
    }
    data[0..4] == SIGNATURE_8BIM || data[0..4] == SIGNATURE_8B64
}

/// One tagged record (borrowed payload).
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    /// Byte offset of the record's signature within the block.
    pub offset: usize,
    /// 4-byte signature (e.g. "8BIM"); not validated, matching Photoshop readers.
    pub signature: [u8; 4],
    /// 4-byte ASCII key (e.g. "luni", "lsct").
    pub key: [u8; 4],
    /// Declared payload size in bytes.
    pub size: u32,
    /// Payload slice, exactly `size` bytes.
    pub payload: &'a [u8],
}

/// Iterator over the packed records of an additional-info block.
///
/// Permissive by design: a record whose declared bounds would overrun the
/// buffer ends the iteration instead of raising an error, so corrupt metadata
/// never fails a scan outright.
#[derive(Debug, Clone)]
pub struct Records<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Records<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = Record<'a>;

    fn next(&mut self) -> Option<Record<'a>> {
        let data = self.data;
        // Reserve room for a full header plus at least one payload byte,
        // as Photoshop's own readers do (offset < len - 12).
        if self.offset.checked_add(RECORD_HEADER_LEN)? >= data.len() {
            return None;
        }
        let start = self.offset;
        let (signature, key, size) = match (
            read_tag(data, start),
            read_tag(data, start + 4),
            read_u32_be(data, start + 8),
        ) {
            (Some(s), Some(k), Some(n)) => (s, k, n),
            _ => {
                self.offset = data.len();
                return None;
            }
        };
        let payload_start = start + RECORD_HEADER_LEN;
        let payload_end = match payload_start.checked_add(size as usize) {
            Some(end) if end <= data.len() => end,
            // Truncated record: stop, do not yield a partial payload.
            _ => {
                self.offset = data.len();
                return None;
            }
        };
        self.offset = payload_end;
        Some(Record {
            offset: start,
            signature,
            key,
            size,
            payload: &data[payload_start..payload_end],
        })
    }
}
