use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use tracing::{debug, instrument};

use crate::candidates::Candidates;
use crate::error::{Error, Result};
use crate::format::{Format, format_by_file_name};
use crate::options::DetectOptions;
use crate::probe::{ProbeResult, probe};
use crate::search::index_of;
use crate::window::ByteWindow;

/// Outcome of a detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Detection {
    pub format: Format,
    /// Byte position where the archive body begins.
    pub offset: u64,
    /// The stream itself is a PE image, whether or not a payload was found.
    pub is_executable: bool,
}

/// Detect an in-memory buffer with default options and no name hint.
pub fn detect_format(data: &[u8]) -> Result<Detection> {
    detect(&mut Cursor::new(data))
}

/// Detect a stream with default options and no name hint.
pub fn detect<R: Read + Seek>(reader: &mut R) -> Result<Detection> {
    detect_from_reader(reader, None, &DetectOptions::default())
}

/// Classify a seekable stream, using `hint` (usually derived from the file
/// name) to settle inconclusive or ambiguous content.
///
/// Content wins over the hint whenever exactly one format matches. The hint
/// is only returned as-is when no probe matches at all. Executables are
/// searched for an embedded archive, which replaces the PE result and moves
/// the offset to the payload.
#[instrument(level = "debug", skip(reader, options))]
pub fn detect_from_reader<R: Read + Seek>(
    reader: &mut R,
    hint: Option<Format>,
    options: &DetectOptions,
) -> Result<Detection> {
    let hint = hint.filter(|&format| format != Format::Unknown);
    let mut window = ByteWindow::new(reader)?;

    let candidates = scan(&mut window, &options.content_formats)?;
    let format = arbitrate(&candidates, hint).ok_or(Error::UnrecognizedContent)?;

    let mut detection = Detection {
        format,
        offset: 0,
        is_executable: false,
    };

    if format == Format::Pe {
        detection.is_executable = true;
        if options.scan_embedded {
            if let Some(payload) = find_embedded(&mut window, options)? {
                debug!(format = %payload.format, offset = payload.offset, "embedded archive in executable");
                detection.format = payload.format;
                detection.offset = payload.offset;
            }
        }
    }

    Ok(detection)
}

/// Classify a file, deriving the hint from its extension.
///
/// An unknown extension only matters when the content is unrecognized too;
/// in that case the extension lookup error is returned.
pub fn detect_from_path(path: impl AsRef<Path>, options: &DetectOptions) -> Result<Detection> {
    detect_path(path.as_ref(), options)
}

#[instrument(level = "debug", skip(options))]
fn detect_path(path: &Path, options: &DetectOptions) -> Result<Detection> {
    let by_name = format_by_file_name(path);
    let hint = by_name.as_ref().ok().copied();

    let mut file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;

    match detect_from_reader(&mut file, hint, options) {
        Err(Error::UnrecognizedContent) => {
            let format = by_name?;
            debug!(%format, "content unrecognized, falling back to extension");
            Ok(Detection {
                format,
                offset: 0,
                is_executable: false,
            })
        }
        other => other,
    }
}

fn scan<R: Read + Seek>(window: &mut ByteWindow<'_, R>, formats: &[Format]) -> Result<Candidates> {
    let mut candidates = Candidates::new();
    for &format in formats {
        let quality = probe(format, window, 0)?;
        candidates.insert(ProbeResult {
            format,
            quality,
            offset: 0,
        });
    }
    Ok(candidates)
}

/// Settle the content candidates against the name hint.
fn arbitrate(candidates: &Candidates, hint: Option<Format>) -> Option<Format> {
    let Some(best) = candidates.best() else {
        debug!(?hint, "no signature matched");
        return hint;
    };

    if candidates.len() == 1 {
        let by_data = best.format;
        match hint {
            None => debug!(format = %by_data, "single match, no name hint"),
            Some(hint) if hint == by_data => debug!(format = %by_data, "single match agrees with name"),
            Some(Format::Rar) if by_data == Format::Rar4 => {
                debug!("legacy RAR4 content under RAR name")
            }
            Some(hint) => debug!(format = %by_data, %hint, "single match contradicts name, trusting content"),
        }
        return Some(by_data);
    }

    debug!(
        ranked = ?candidates.iter().map(|r| (r.format, r.quality)).collect::<Vec<_>>(),
        "multiple matches"
    );
    // the tar probe is checksum based and collides easily
    if hint == Some(Format::Tar) && candidates.contains(Format::Tar) {
        return Some(Format::Tar);
    }
    Some(best.format)
}

/// Best archive signature inside the head of an executable.
fn find_embedded<R: Read + Seek>(
    window: &mut ByteWindow<'_, R>,
    options: &DetectOptions,
) -> Result<Option<ProbeResult>> {
    if options.sfx_scan_length == 0 || window.is_empty() {
        return Ok(None);
    }

    let head = window.read_at(0, options.sfx_scan_length, true)?;
    let mut found = Candidates::new();

    for &format in &options.embedded_formats {
        let signature = format.signature().ok_or(Error::NoProbe(format))?;
        let Some(pos) = index_of(&head, signature) else {
            continue;
        };
        let offset = pos as u64;
        let quality = probe(format, window, offset)?;
        found.insert(ProbeResult {
            format,
            quality,
            offset,
        });
    }

    Ok(found.best().copied())
}
