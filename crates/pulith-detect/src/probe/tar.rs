use std::io::{Read, Seek};
use std::ops::Range;

use crate::error::Result;
use crate::format::USTAR_SIGNATURE;
use crate::probe::position;
use crate::window::ByteWindow;

const HEADER_LEN: usize = 512;
const CHECKSUM_FIELD: Range<usize> = 148..156;
const USTAR_OFFSET: u64 = 257;

/// Weight of a verified header checksum: a tenth of the header, since no
/// real magic number was checked.
pub const CHECKSUM_QUALITY: u32 = (HEADER_LEN / 10) as u32;

/// Tar has no fixed magic. The ustar/pax marker scores its length and a
/// header checksum that adds up scores [`CHECKSUM_QUALITY`]; v7 archives
/// only ever get the latter.
pub(super) fn probe<R: Read + Seek>(window: &mut ByteWindow<'_, R>, check_offset: u64) -> Result<u32> {
    if window.len() < HEADER_LEN as u64 {
        return Ok(0);
    }

    let mut quality = 0;

    if window.matches_at(position(check_offset, USTAR_OFFSET), USTAR_SIGNATURE)? {
        quality += USTAR_SIGNATURE.len() as u32;
    }

    let header = window.read_at(position(check_offset, 0), HEADER_LEN, false)?;
    if header.len() == HEADER_LEN && header_checksum(&header) == stored_checksum(&header[CHECKSUM_FIELD]) {
        quality += CHECKSUM_QUALITY;
    }

    Ok(quality)
}

/// Unsigned byte sum of the header with the checksum field read as spaces.
fn header_checksum(header: &[u8]) -> u64 {
    header
        .iter()
        .enumerate()
        .map(|(i, &b)| if CHECKSUM_FIELD.contains(&i) { b' ' } else { b })
        .map(u64::from)
        .sum()
}

/// Octal checksum as stored: padding below `'0'` is skipped, then the digit
/// run up to the next byte below `'0'` is read least significant last.
fn stored_checksum(field: &[u8]) -> u64 {
    let start = field.iter().position(|&b| b >= b'0').unwrap_or(field.len());
    let digits = &field[start..];
    let end = digits.iter().position(|&b| b < b'0').unwrap_or(digits.len());

    digits[..end]
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &b)| u64::from(b - b'0') * 8u64.pow(i as u32))
        .sum()
}
