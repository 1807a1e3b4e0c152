use std::collections::VecDeque;

/// Index of the first occurrence of `needle` in `haystack`.
///
/// Single pass: every position whose byte equals the first needle byte opens
/// a candidate start, and each live candidate is dropped as soon as a later
/// byte disagrees with the needle. Overlapping partial matches are tracked
/// side by side, so nothing is re-scanned. Starts are kept in ascending order,
/// which makes the front candidate the first one able to complete.
pub fn index_of(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    let (&first, _) = needle.split_first()?;
    let mut starts: VecDeque<usize> = VecDeque::new();

    for (pos, &byte) in haystack.iter().enumerate() {
        starts.retain(|&start| needle[pos - start] == byte);

        if byte == first {
            starts.push_back(pos);
        }

        if let Some(&start) = starts.front() {
            if pos - start + 1 == needle.len() {
                return Some(start);
            }
        }
    }

    None
}
