use std::io::{Read, Seek};

use crate::error::Result;
use crate::format::{DOS_SIGNATURE, PE_SIGNATURE};
use crate::probe::position;
use crate::window::ByteWindow;

/// Offset of `e_lfanew` in the DOS header.
const LFANEW_OFFSET: u64 = 0x3c;
const DOS_HEADER_LEN: u64 = 0x40;

/// Two-stage PE check: DOS stub magic, then the NT header magic at the
/// position stored in `e_lfanew`. Both must match to score.
pub(super) fn probe<R: Read + Seek>(window: &mut ByteWindow<'_, R>, check_offset: u64) -> Result<u32> {
    if window.len() < check_offset.saturating_add(DOS_HEADER_LEN) {
        return Ok(0);
    }

    if !window.matches_at(position(check_offset, 0), DOS_SIGNATURE)? {
        return Ok(0);
    }

    let field = window.read_at(position(check_offset, LFANEW_OFFSET), 4, false)?;
    let Ok(field) = <[u8; 4]>::try_from(field.as_slice()) else {
        return Ok(0);
    };
    let nt_header = i64::from(i32::from_le_bytes(field)).saturating_add(position(check_offset, 0));

    if window.matches_at(nt_header, PE_SIGNATURE)? {
        Ok((DOS_SIGNATURE.len() + PE_SIGNATURE.len()) as u32)
    } else {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn image(lfanew: i32, nt_at: usize) -> Vec<u8> {
        let mut data = vec![0u8; 0x200];
        data[..2].copy_from_slice(b"MZ");
        data[0x3c..0x40].copy_from_slice(&lfanew.to_le_bytes());
        data[nt_at..nt_at + 4].copy_from_slice(b"PE\0\0");
        data
    }

    fn score(data: Vec<u8>, check_offset: u64) -> u32 {
        let mut cursor = Cursor::new(data);
        let mut window = ByteWindow::new(&mut cursor).unwrap();
        probe(&mut window, check_offset).unwrap()
    }

    #[test]
    fn valid_image_scores_both_magics() {
        assert_eq!(score(image(0x80, 0x80), 0), 6);
    }

    #[test]
    fn dos_stub_without_nt_header() {
        assert_eq!(score(image(0x100, 0x80), 0), 0);
    }

    #[test]
    fn negative_lfanew_misses() {
        assert_eq!(score(image(-4, 0x80), 0), 0);
    }

    #[test]
    fn lfanew_is_relative_to_check_offset() {
        let mut data = vec![0u8; 0x40];
        data.extend(image(0x80, 0x80));
        assert_eq!(score(data, 0x40), 6);
    }

    #[test]
    fn shorter_than_dos_header() {
        let mut data = vec![0u8; 0x3f];
        data[..2].copy_from_slice(b"MZ");
        assert_eq!(score(data, 0), 0);
    }
}
