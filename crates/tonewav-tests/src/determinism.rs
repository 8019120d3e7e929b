//! Determinism checks for rendered output.
//!
//! A render must depend on its config alone. These helpers run a producer
//! several times and report the first byte at which two runs disagree.

use std::fmt;

/// Outcome of running a producer several times.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether every run matched the first one.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Length of the first run's output.
    pub output_size: usize,
    /// BLAKE3 hash of the first run's output.
    pub hash: String,
    /// First mismatch, if any.
    pub diff_info: Option<DiffInfo>,
}

/// First mismatch between the reference run and a later run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInfo {
    /// Byte offset of the mismatch. Equals the shorter length when only the
    /// lengths differ.
    pub offset: usize,
    /// Byte from the reference run, if it has one at `offset`.
    pub expected: Option<u8>,
    /// Byte from the later run, if it has one at `offset`.
    pub actual: Option<u8>,
    /// Zero-based index of the differing run.
    pub run_index: usize,
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |b: Option<u8>| match b {
            Some(b) => format!("0x{:02X}", b),
            None => "<end>".to_string(),
        };
        write!(
            f,
            "Difference at byte {}: expected {}, got {} (run {})",
            self.offset,
            show(self.expected),
            show(self.actual),
            self.run_index
        )
    }
}

impl DeterminismResult {
    /// Panics with the mismatch details if the runs disagreed.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff_info {
            panic!(
                "Non-deterministic output detected!\n\
                 Runs: {}\n\
                 Output size: {} bytes\n\
                 Hash: {}\n\
                 {}",
                self.runs, self.output_size, self.hash, diff
            );
        }
    }
}

/// Runs `produce` `runs` times and compares every output to the first.
///
/// # Panics
///
/// Panics if `runs` is less than 2.
pub fn verify_determinism<F, O>(produce: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> O,
    O: AsRef<[u8]>,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = produce();
    let reference = reference.as_ref();
    let hash = compute_hash(reference);

    let diff_info = (1..runs).find_map(|run_index| {
        let output = produce();
        first_difference(reference, output.as_ref(), run_index)
    });

    DeterminismResult {
        is_deterministic: diff_info.is_none(),
        runs,
        output_size: reference.len(),
        hash,
        diff_info,
    }
}

/// Finds the first differing byte, treating a length mismatch as a
/// difference at the end of the shorter slice.
pub(crate) fn first_difference(
    expected: &[u8],
    actual: &[u8],
    run_index: usize,
) -> Option<DiffInfo> {
    let offset = match expected.iter().zip(actual).position(|(e, a)| e != a) {
        Some(offset) => offset,
        None if expected.len() != actual.len() => expected.len().min(actual.len()),
        None => return None,
    };

    Some(DiffInfo {
        offset,
        expected: expected.get(offset).copied(),
        actual: actual.get(offset).copied(),
        run_index,
    })
}

/// Compute BLAKE3 hash of data.
pub fn compute_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Runs `produce` `runs` times and panics on the first mismatch.
pub fn assert_deterministic<F>(runs: usize, produce: F)
where
    F: Fn() -> Vec<u8>,
{
    verify_determinism(&produce, runs).assert_deterministic();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_identical_runs_pass() {
        let result = verify_determinism(|| vec![1u8, 2, 3], 4);
        assert!(result.is_deterministic);
        assert_eq!(result.runs, 4);
        assert_eq!(result.output_size, 3);
        assert_eq!(result.hash, compute_hash(&[1, 2, 3]));
    }

    #[test]
    fn test_changing_byte_is_located() {
        let counter = Cell::new(0u8);
        let result = verify_determinism(
            || {
                counter.set(counter.get() + 1);
                vec![0u8, 0, counter.get()]
            },
            3,
        );
        assert!(!result.is_deterministic);
        let diff = result.diff_info.unwrap();
        assert_eq!(diff.offset, 2);
        assert_eq!(diff.expected, Some(1));
        assert_eq!(diff.actual, Some(2));
        assert_eq!(diff.run_index, 1);
    }

    #[test]
    fn test_length_mismatch_is_reported_at_end() {
        let diff = first_difference(&[1, 2, 3], &[1, 2], 1).unwrap();
        assert_eq!(diff.offset, 2);
        assert_eq!(diff.expected, Some(3));
        assert_eq!(diff.actual, None);
        assert!(diff.to_string().contains("<end>"));
    }

    #[test]
    fn test_equal_slices_have_no_difference() {
        assert_eq!(first_difference(&[9, 9], &[9, 9], 1), None);
    }

    #[test]
    #[should_panic(expected = "at least 2")]
    fn test_single_run_is_rejected() {
        verify_determinism(|| vec![0u8], 1);
    }

    #[test]
    #[should_panic(expected = "Non-deterministic")]
    fn test_assert_deterministic_panics_on_mismatch() {
        let counter = Cell::new(0u8);
        assert_deterministic(2, || {
            counter.set(counter.get() + 1);
            vec![counter.get()]
        });
    }
}
