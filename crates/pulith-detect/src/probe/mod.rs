//! Per-format signature probes.
//!
//! A probe scores how well the bytes at a base offset match one format.
//! Quality is the number of signature bytes verified, or 0 for no match.
//! Probes only read through the [`ByteWindow`], so the same functions serve
//! the top-level scan and the scan for payloads embedded in executables.

use std::io::{Read, Seek};

use tracing::trace;

use crate::error::{Error, Result};
use crate::format::Format;
use crate::window::ByteWindow;

mod pe;
mod tar;

pub use tar::CHECKSUM_QUALITY as TAR_CHECKSUM_QUALITY;

const HFS_OFFSET: u64 = 0x400;
const ISO_OFFSETS: [u64; 3] = [0x8001, 0x8801, 0x9001];
const LZH_OFFSET: u64 = 2;
const DMG_TRAILER_LEN: i64 = 512;

/// A single probe outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProbeResult {
    pub format: Format,
    pub quality: u32,
    /// Base offset the probe was run at.
    pub offset: u64,
}

/// Score `format` against the bytes at `check_offset`.
///
/// Formats without a signature have no probe and yield [`Error::NoProbe`].
pub fn probe<R: Read + Seek>(
    format: Format,
    window: &mut ByteWindow<'_, R>,
    check_offset: u64,
) -> Result<u32> {
    let quality = match format {
        Format::Hfs => signature_at(window, format, position(check_offset, HFS_OFFSET))?,
        Format::Iso => iso(window, check_offset)?,
        Format::Lzh => signature_at(window, format, position(check_offset, LZH_OFFSET))?,
        Format::Dmg => {
            // trailer sits at a fixed distance from the end, whatever the base
            let trailer = i64::try_from(window.len()).unwrap_or(i64::MAX) - DMG_TRAILER_LEN;
            signature_at(window, format, trailer)?
        }
        Format::Pe => pe::probe(window, check_offset)?,
        Format::Tar => tar::probe(window, check_offset)?,
        Format::Arj
        | Format::Bzip2
        | Format::Cab
        | Format::Chm
        | Format::Compound
        | Format::Deb
        | Format::Elf
        | Format::Flv
        | Format::Gzip
        | Format::Lzma
        | Format::Lzw
        | Format::Mub
        | Format::Rar
        | Format::Rar4
        | Format::Rpm
        | Format::SevenZip
        | Format::Swf
        | Format::Udf
        | Format::Vhd
        | Format::Wim
        | Format::Xz
        | Format::Xar
        | Format::Zip => signature_at(window, format, position(check_offset, 0))?,
        Format::Cpio
        | Format::Msi
        | Format::Mslz
        | Format::Nsis
        | Format::Split
        | Format::Unknown => return Err(Error::NoProbe(format)),
    };

    if quality > 0 {
        trace!(%format, quality, check_offset, "signature matched");
    }
    Ok(quality)
}

/// Absolute read position for a probe-relative offset.
pub(crate) fn position(check_offset: u64, relative: u64) -> i64 {
    i64::try_from(check_offset.saturating_add(relative)).unwrap_or(i64::MAX)
}

fn signature_at<R: Read + Seek>(
    window: &mut ByteWindow<'_, R>,
    format: Format,
    position: i64,
) -> Result<u32> {
    let signature = format.signature().ok_or(Error::NoProbe(format))?;
    if window.matches_at(position, signature)? {
        Ok(signature.len() as u32)
    } else {
        Ok(0)
    }
}

fn iso<R: Read + Seek>(window: &mut ByteWindow<'_, R>, check_offset: u64) -> Result<u32> {
    for offset in ISO_OFFSETS {
        let quality = signature_at(window, Format::Iso, position(check_offset, offset))?;
        if quality > 0 {
            return Ok(quality);
        }
    }
    Ok(0)
}
