//! Format catalogue: the closed set of detectable formats, their signature
//! bytes and the filename-extension table.

use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};

/// Container formats known to the detector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Format {
    Arj,
    Bzip2,
    Cab,
    Chm,
    Compound,
    Cpio,
    Deb,
    Dmg,
    Elf,
    Flv,
    Gzip,
    Hfs,
    Iso,
    Lzh,
    Lzma,
    Lzw,
    Msi,
    Mslz,
    Mub,
    Nsis,
    Pe,
    Rar,
    Rar4,
    Rpm,
    SevenZip,
    Split,
    Swf,
    Tar,
    Udf,
    Vhd,
    Wim,
    Xz,
    Xar,
    Zip,
    Unknown,
}

const ARJ: &[u8] = &[0x60, 0xEA];
const BZIP2: &[u8] = b"BZh";
const CAB: &[u8] = b"MSCF";
const CHM: &[u8] = b"ITSF";
const COMPOUND: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];
const DEB: &[u8] = b"!<arch>\ndebian-binary";
const DMG: &[u8] = b"koly";
const ELF: &[u8] = &[0x7F, 0x45, 0x4C, 0x46];
const FLV: &[u8] = b"FLV";
const GZIP: &[u8] = &[0x1F, 0x8B, 0x08];
const HFS: &[u8] = b"H+";
const ISO: &[u8] = b"CD001";
const LZH: &[u8] = b"-lh";
const LZMA: &[u8] = &[0x5D, 0x00, 0x00, 0x40, 0x00];
const LZW: &[u8] = &[0x1F, 0x9D];
const MUB: &[u8] = &[0xCA, 0xFE, 0xBA, 0xBE];
const RAR5: &[u8] = b"Rar!\x1A\x07\x01\x00";
const RAR4: &[u8] = b"Rar!\x1A\x07\x00";
const RPM: &[u8] = &[0xED, 0xAB, 0xEE, 0xDB];
const SEVEN_ZIP: &[u8] = &[0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C];
const SWF: &[u8] = b"FWS";
const UDF: &[u8] = b"BEA01";
const VHD: &[u8] = b"conectix";
const WIM: &[u8] = b"MSWIM\0\0\0";
const XZ: &[u8] = &[0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00];
const XAR: &[u8] = b"xar!";
const ZIP: &[u8] = &[0x50, 0x4B, 0x03, 0x04];

/// DOS stub magic at the start of every PE image.
pub const DOS_SIGNATURE: &[u8] = b"MZ";
/// NT header magic, located through the `e_lfanew` field of the DOS stub.
pub const PE_SIGNATURE: &[u8] = b"PE\0\0";
/// ustar/pax marker at offset 257 of a tar header.
pub const USTAR_SIGNATURE: &[u8] = b"ustar";

impl Format {
    /// Every variant, in declaration order.
    pub const ALL: [Format; 35] = [
        Format::Arj,
        Format::Bzip2,
        Format::Cab,
        Format::Chm,
        Format::Compound,
        Format::Cpio,
        Format::Deb,
        Format::Dmg,
        Format::Elf,
        Format::Flv,
        Format::Gzip,
        Format::Hfs,
        Format::Iso,
        Format::Lzh,
        Format::Lzma,
        Format::Lzw,
        Format::Msi,
        Format::Mslz,
        Format::Mub,
        Format::Nsis,
        Format::Pe,
        Format::Rar,
        Format::Rar4,
        Format::Rpm,
        Format::SevenZip,
        Format::Split,
        Format::Swf,
        Format::Tar,
        Format::Udf,
        Format::Vhd,
        Format::Wim,
        Format::Xz,
        Format::Xar,
        Format::Zip,
        Format::Unknown,
    ];

    /// Signature bytes for this format, if it has one.
    ///
    /// For [`Format::Pe`] this is the DOS stub magic; the NT header magic is
    /// [`PE_SIGNATURE`]. For [`Format::Tar`] it is the ustar marker, which v7
    /// archives do not carry.
    pub fn signature(self) -> Option<&'static [u8]> {
        let sig = match self {
            Self::Arj => ARJ,
            Self::Bzip2 => BZIP2,
            Self::Cab => CAB,
            Self::Chm => CHM,
            Self::Compound => COMPOUND,
            Self::Deb => DEB,
            Self::Dmg => DMG,
            Self::Elf => ELF,
            Self::Flv => FLV,
            Self::Gzip => GZIP,
            Self::Hfs => HFS,
            Self::Iso => ISO,
            Self::Lzh => LZH,
            Self::Lzma => LZMA,
            Self::Lzw => LZW,
            Self::Mub => MUB,
            Self::Pe => DOS_SIGNATURE,
            Self::Rar => RAR5,
            Self::Rar4 => RAR4,
            Self::Rpm => RPM,
            Self::SevenZip => SEVEN_ZIP,
            Self::Swf => SWF,
            Self::Tar => USTAR_SIGNATURE,
            Self::Udf => UDF,
            Self::Vhd => VHD,
            Self::Wim => WIM,
            Self::Xz => XZ,
            Self::Xar => XAR,
            Self::Zip => ZIP,
            Self::Cpio | Self::Msi | Self::Mslz | Self::Nsis | Self::Split | Self::Unknown => {
                return None;
            }
        };
        Some(sig)
    }

    /// Look up a format by filename extension (without the dot, any case).
    pub fn from_extension(ext: &str) -> Option<Format> {
        let format = match ext.to_ascii_lowercase().as_str() {
            "7z" => Self::SevenZip,
            "arj" => Self::Arj,
            "bz2" | "bzip2" | "tbz2" | "tbz" => Self::Bzip2,
            "cab" => Self::Cab,
            "chm" | "chi" | "chq" | "chw" => Self::Chm,
            "msg" | "doc" | "xls" | "ppt" => Self::Compound,
            "cpio" => Self::Cpio,
            "deb" => Self::Deb,
            "dmg" => Self::Dmg,
            "elf" | "so" => Self::Elf,
            "flv" => Self::Flv,
            "gz" | "gzip" | "tgz" => Self::Gzip,
            "hfs" => Self::Hfs,
            "iso" => Self::Iso,
            "lzh" | "lha" => Self::Lzh,
            "lzma" => Self::Lzma,
            "z" | "taz" => Self::Lzw,
            "msi" => Self::Msi,
            "mslz" => Self::Mslz,
            "mub" => Self::Mub,
            "nsis" => Self::Nsis,
            "exe" | "dll" | "sys" => Self::Pe,
            "rar" => Self::Rar,
            "rpm" => Self::Rpm,
            "001" => Self::Split,
            "swf" => Self::Swf,
            "tar" => Self::Tar,
            "udf" => Self::Udf,
            "vhd" => Self::Vhd,
            "wim" | "swm" => Self::Wim,
            "xz" | "txz" => Self::Xz,
            "xar" | "pkg" => Self::Xar,
            "zip" | "jar" | "xpi" => Self::Zip,
            _ => return None,
        };
        Some(format)
    }

    /// Short display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Arj => "ARJ",
            Self::Bzip2 => "BZip2",
            Self::Cab => "CAB",
            Self::Chm => "CHM",
            Self::Compound => "Compound",
            Self::Cpio => "CPIO",
            Self::Deb => "DEB",
            Self::Dmg => "DMG",
            Self::Elf => "ELF",
            Self::Flv => "FLV",
            Self::Gzip => "GZip",
            Self::Hfs => "HFS",
            Self::Iso => "ISO",
            Self::Lzh => "LZH",
            Self::Lzma => "LZMA",
            Self::Lzw => "LZW",
            Self::Msi => "MSI",
            Self::Mslz => "MSLZ",
            Self::Mub => "MUB",
            Self::Nsis => "NSIS",
            Self::Pe => "PE",
            Self::Rar => "RAR",
            Self::Rar4 => "RAR4",
            Self::Rpm => "RPM",
            Self::SevenZip => "7z",
            Self::Split => "Split",
            Self::Swf => "SWF",
            Self::Tar => "TAR",
            Self::Udf => "UDF",
            Self::Vhd => "VHD",
            Self::Wim => "WIM",
            Self::Xz => "XZ",
            Self::Xar => "XAR",
            Self::Zip => "ZIP",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tentative format derived from the file name alone.
pub fn format_by_file_name(path: impl AsRef<Path>) -> Result<Format> {
    let path = path.as_ref();
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(Format::from_extension)
        .ok_or_else(|| Error::UnknownExtension {
            path: path.to_path_buf(),
        })
}
