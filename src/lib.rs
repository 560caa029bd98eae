//! # psdinfo
//!
//! Extract the layer name from the "additional info" metadata block of a PSD
//! (layered image) document.
//!
//! The block is a packed sequence of tagged records
//! (`Signature(4) Key(4 ASCII) Size(u32 BE) Payload(Size)`); the "luni" record
//! carries the layer's Unicode name as `CharCount(u32 BE)` followed by
//! `CharCount * 2` bytes of UTF-16 big-endian text. [`scan_additional_info`]
//! walks the records and decodes the first "luni" it finds.
//!
//! Parsing is **permissive by design**: truncated records, malformed length
//! fields and absent "luni" records all degrade to `None` rather than errors,
//! so corrupt metadata never fails an image pipeline. The scanner never reads
//! out of bounds and never mutates the caller's buffer; calls on independent
//! buffers are safe from any number of threads.
//!
//! ## Example
//!
//! ```no_run
//! let bytes = std::fs::read("additional-info.bin").unwrap();
//! match psdinfo::scan_additional_info(&bytes) {
//!     Some(info) => println!("layer name: {}", info.layer_name()),
//!     None => println!("no layer name"),
//! }
//! ```
//!
//! The caller owning image decoding supplies the raw block (e.g. ImageMagick's
//! `psd:additional-info` profile); this crate does no image loading itself.

mod info;
pub mod psd;

pub use info::{AdditionalInfo, RecordSummary};
pub use psd::{is_additional_info, list_records, scan_additional_info, Record, Records};
