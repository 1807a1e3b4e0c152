//! Container format detection from content, with the file name as a hint.
//!
//! # Architecture
//!
//! - `format.rs` - Format set, signature catalogue, extension table
//! - `window.rs` - Bounds-checked positioned reads
//! - `search.rs` - Sub-sequence search for embedded signatures
//! - `probe/` - Per-format probes (tar checksum, PE headers, plain magic)
//! - `candidates.rs` - Quality-ranked probe results
//! - `detect.rs` - Arbitration and entry points
//!
//! # Example
//!
//! ```
//! use pulith_detect::{Format, detect_format};
//!
//! let detection = detect_format(b"PK\x03\x04\x14\x00\x00\x00").unwrap();
//! assert_eq!(detection.format, Format::Zip);
//! assert_eq!(detection.offset, 0);
//! assert!(!detection.is_executable);
//! ```

pub use candidates::Candidates;
pub use detect::{Detection, detect, detect_format, detect_from_path, detect_from_reader};
pub use error::{Error, Result};
pub use format::{Format, format_by_file_name};
pub use options::DetectOptions;
pub use probe::{ProbeResult, TAR_CHECKSUM_QUALITY, probe};
pub use search::index_of;
pub use window::ByteWindow;

pub mod format;
pub mod options;
mod candidates;
mod detect;
mod error;
mod probe;
mod search;
mod window;
