use crate::format::Format;

/// Formats probed at offset 0 of every stream.
pub const CONTENT_FORMATS: [Format; 28] = [
    Format::Arj,
    Format::Bzip2,
    Format::Cab,
    Format::Chm,
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
    Format::Mub,
    Format::Pe,
    Format::Rar,
    Format::Rar4,
    Format::Rpm,
    Format::SevenZip,
    Format::Swf,
    Format::Tar,
    Format::Udf,
    Format::Vhd,
    Format::Wim,
    Format::Xz,
    Format::Xar,
    Format::Zip,
];

/// Payload formats searched for inside executables.
pub const EMBEDDED_FORMATS: [Format; 6] = [
    Format::Zip,
    Format::SevenZip,
    Format::Rar4,
    Format::Rar,
    Format::Cab,
    Format::Arj,
];

/// Bytes from the start of an executable searched for a payload signature.
pub const SFX_SCAN_LENGTH: usize = 256 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DetectOptions {
    /// Probed in this order; the order breaks quality ties.
    pub content_formats: Vec<Format>,
    pub embedded_formats: Vec<Format>,
    pub sfx_scan_length: usize,
    /// When false, executables are reported as PE without a payload search.
    pub scan_embedded: bool,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            content_formats: CONTENT_FORMATS.to_vec(),
            embedded_formats: EMBEDDED_FORMATS.to_vec(),
            sfx_scan_length: SFX_SCAN_LENGTH,
            scan_embedded: true,
        }
    }
}

impl DetectOptions {
    pub fn content_formats(mut self, formats: impl IntoIterator<Item = Format>) -> Self {
        self.content_formats = formats.into_iter().collect();
        self
    }

    pub fn embedded_formats(mut self, formats: impl IntoIterator<Item = Format>) -> Self {
        self.embedded_formats = formats.into_iter().collect();
        self
    }

    pub fn sfx_scan_length(mut self, len: usize) -> Self {
        self.sfx_scan_length = len;
        self
    }

    pub fn scan_embedded(mut self, enabled: bool) -> Self {
        self.scan_embedded = enabled;
        self
    }
}
