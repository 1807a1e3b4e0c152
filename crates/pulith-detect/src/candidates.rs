use crate::format::Format;
use crate::probe::ProbeResult;

/// Probe results ranked by quality, best first.
///
/// Equal qualities are all kept and stay in insertion order, so the probe
/// order decides ties. Results with quality 0 are never stored.
#[derive(Clone, Debug, Default)]
pub struct Candidates {
    ranked: Vec<ProbeResult>,
}

impl Candidates {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, result: ProbeResult) {
        if result.quality == 0 {
            return;
        }
        self.ranked.push(result);
        // stable: ties keep insertion order
        self.ranked.sort_by(|a, b| b.quality.cmp(&a.quality));
    }

    pub fn len(&self) -> usize { self.ranked.len() }

    pub fn is_empty(&self) -> bool { self.ranked.is_empty() }

    /// Highest quality result, first inserted among equals.
    pub fn best(&self) -> Option<&ProbeResult> { self.ranked.first() }

    pub fn contains(&self, format: Format) -> bool {
        self.ranked.iter().any(|r| r.format == format)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProbeResult> { self.ranked.iter() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(format: Format, quality: u32) -> ProbeResult {
        ProbeResult {
            format,
            quality,
            offset: 0,
        }
    }

    #[test]
    fn zero_quality_is_dropped() {
        let mut candidates = Candidates::new();
        candidates.insert(result(Format::Zip, 0));
        assert!(candidates.is_empty());
        assert!(candidates.best().is_none());
    }

    #[test]
    fn ranks_by_quality_descending() {
        let mut candidates = Candidates::new();
        candidates.insert(result(Format::Bzip2, 3));
        candidates.insert(result(Format::Tar, 51));
        candidates.insert(result(Format::Zip, 4));

        let order: Vec<_> = candidates.iter().map(|r| r.format).collect();
        assert_eq!(order, [Format::Tar, Format::Zip, Format::Bzip2]);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let mut candidates = Candidates::new();
        candidates.insert(result(Format::Cab, 4));
        candidates.insert(result(Format::Elf, 4));
        candidates.insert(result(Format::Zip, 4));

        assert_eq!(candidates.len(), 3);
        let order: Vec<_> = candidates.iter().map(|r| r.format).collect();
        assert_eq!(order, [Format::Cab, Format::Elf, Format::Zip]);
        assert_eq!(candidates.best().unwrap().format, Format::Cab);
    }

    #[test]
    fn contains_checks_any_rank() {
        let mut candidates = Candidates::new();
        candidates.insert(result(Format::Deb, 21));
        candidates.insert(result(Format::Tar, 5));
        assert!(candidates.contains(Format::Tar));
        assert!(!candidates.contains(Format::Zip));
    }
}
