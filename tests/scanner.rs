//! Scanner tests: "luni" decoding, bounds policy, first-match behavior.

use psdinfo::scan_additional_info;

/// Build one tagged record: 8BIM signature, key, big-endian size, payload.
fn record(key: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut v = Vec::new();
    v.extend_from_slice(b"8BIM");
    v.extend_from_slice(key);
    v.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    v.extend_from_slice(payload);
    v
}

/// Build a "luni" payload: char count then UTF-16 big-endian text.
fn luni_payload(name: &str) -> Vec<u8> {
    let units: Vec<u16> = name.encode_utf16().collect();
    let mut v = Vec::new();
    v.extend_from_slice(&(units.len() as u32).to_be_bytes());
    for u in units {
        v.extend_from_slice(&u.to_be_bytes());
    }
    v
}

#[test]
fn empty_buffer_not_found() {
    assert_eq!(scan_additional_info(&[]), None);
}

#[test]
fn short_buffers_not_found() {
    // Anything shorter than signature + key + size + 1 payload byte never scans.
    for len in 0..13 {
        let v = vec![0xFFu8; len];
        assert_eq!(scan_additional_info(&v), None, "len {}", len);
    }
}

#[test]
fn roundtrip_cat() {
    let block = record(b"luni", &luni_payload("CAT"));
    let info = scan_additional_info(&block).unwrap();
    assert_eq!(info.layer_name(), "CAT");
}

#[test]
fn non_ascii_name() {
    let block = record(b"luni", &luni_payload("Ebene \u{00DC}ber"));
    let info = scan_additional_info(&block).unwrap();
    assert_eq!(info.layer_name(), "Ebene \u{00DC}ber");
}

#[test]
fn empty_name_is_found() {
    let block = record(b"luni", &luni_payload(""));
    let info = scan_additional_info(&block).unwrap();
    assert_eq!(info.layer_name(), "");
}

#[test]
fn key_match_is_case_insensitive() {
    for key in [b"LUNI", b"Luni", b"lUnI"] {
        let block = record(key, &luni_payload("CAT"));
        let info = scan_additional_info(&block).unwrap();
        assert_eq!(info.layer_name(), "CAT");
    }
}

#[test]
fn truncated_record_not_found() {
    // Declared size reaches past the end of the buffer.
    let mut block = Vec::new();
    block.extend_from_slice(b"8BIM");
    block.extend_from_slice(b"luni");
    block.extend_from_slice(&100u32.to_be_bytes());
    block.extend_from_slice(&[0u8; 5]);
    assert_eq!(scan_additional_info(&block), None);
}

#[test]
fn malformed_char_count_not_found() {
    // charCount * 2 exceeds size - 4.
    let mut payload = Vec::new();
    payload.extend_from_slice(&10u32.to_be_bytes());
    payload.extend_from_slice(&[0u8; 2]);
    let block = record(b"luni", &payload);
    assert_eq!(scan_additional_info(&block), None);
}

#[test]
fn huge_char_count_not_found() {
    // A count whose doubled value wraps 32 bits must not slip past the check.
    let mut payload = Vec::new();
    payload.extend_from_slice(&u32::MAX.to_be_bytes());
    payload.extend_from_slice(&[0u8; 8]);
    let block = record(b"luni", &payload);
    assert_eq!(scan_additional_info(&block), None);
}

#[test]
fn skips_other_records() {
    let mut block = record(b"lsct", &[0u8; 4]);
    block.extend_from_slice(&record(b"luni", &luni_payload("Background")));
    let info = scan_additional_info(&block).unwrap();
    assert_eq!(info.layer_name(), "Background");
}

#[test]
fn first_luni_wins() {
    let mut block = record(b"luni", &luni_payload("First"));
    block.extend_from_slice(&record(b"luni", &luni_payload("Second")));
    let info = scan_additional_info(&block).unwrap();
    assert_eq!(info.layer_name(), "First");
}

#[test]
fn malformed_first_luni_stops_scan() {
    // A bad length field ends the scan; a later valid record is not consulted.
    let mut payload = Vec::new();
    payload.extend_from_slice(&50u32.to_be_bytes());
    payload.extend_from_slice(&[0u8; 4]);
    let mut block = record(b"luni", &payload);
    block.extend_from_slice(&record(b"luni", &luni_payload("Later")));
    assert_eq!(scan_additional_info(&block), None);
}

#[test]
fn scan_is_idempotent_and_does_not_mutate() {
    let block = record(b"luni", &luni_payload("CAT"));
    let original = block.clone();
    let first = scan_additional_info(&block);
    let second = scan_additional_info(&block);
    assert_eq!(first, second);
    assert_eq!(block, original);
}

#[test]
fn random_buffers_never_panic() {
    // Deterministic xorshift sweep over adversarial buffers.
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    for _ in 0..512 {
        let len = (next() % 300) as usize;
        let buf: Vec<u8> = (0..len).map(|_| next() as u8).collect();
        let _ = scan_additional_info(&buf);
    }
}
