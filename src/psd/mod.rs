//! PSD additional-info block parsing: tagged record walk and "luni" (Unicode
//! layer name) decoding.
//! See https://www.adobe.com/devnet-apps/photoshop/fileformatashtml/

mod parser;
mod scanner;

pub use parser::{is_additional_info, Record, Records, RECORD_HEADER_LEN};
pub use scanner::{list_records, scan_additional_info};
