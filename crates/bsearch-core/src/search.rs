//! The `bsearch` entry point
//!
//! Half-open lower-bound search over `[0, RIGHT)`:
//!
//! ```text
//! l = 0, r = RIGHT
//! while l != r:
//!     mid = (l + r) / 2
//!     if array[mid] < v: l = mid + 1
//!     else:              r = mid
//! return l if array[l] == v else FAILED
//! ```
//!
//! The loop only reads `array[mid]` with `mid < r <= RIGHT <= len`. The final
//! read of `array[l]` goes through [`SearchTable::get`], so `l == len` yields
//! `FAILED` instead of reading past the end.

use serde::Serialize;

use crate::{HostInput, Provenance, Result, SearchImage, SearchTable};

/// One iteration of the search loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Probe {
    /// `l` before the step
    pub low: u32,
    /// `r` before the step
    pub high: u32,
    pub mid: u32,
    /// `array[mid]`
    pub value: u64,
    /// `array[mid] < v`, the window moved to `[mid + 1, r)`
    pub went_right: bool,
}

/// Full record of one invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRun {
    /// Value read from the public channel
    pub target: u64,
    /// Index or the image's `FAILED` sentinel
    pub result: u32,
    pub found: bool,
    pub probes: Vec<Probe>,
}

/// Read one public value and search for it.
///
/// Returns the index of the leftmost matching element, or the image's
/// `FAILED` sentinel. The only error is a failing input channel.
pub fn bsearch<I: HostInput + ?Sized>(image: &SearchImage, input: &mut I) -> Result<u32> {
    let target = input.input(Provenance::Public)?;
    let low = converge(image.table(), image.right(), target, |_| {});
    Ok(resolve(image, low, target))
}

/// [`bsearch`] that also records every probe
pub fn bsearch_traced<I: HostInput + ?Sized>(
    image: &SearchImage,
    input: &mut I,
) -> Result<SearchRun> {
    let target = input.input(Provenance::Public)?;

    let mut probes = Vec::new();
    let low = converge(image.table(), image.right(), target, |probe| probes.push(probe));
    let result = resolve(image, low, target);

    Ok(SearchRun {
        target,
        result,
        found: result != image.failed(),
        probes,
    })
}

/// Index the loop converges on: the leftmost position in `[0, RIGHT)` whose
/// value is `>= target`, or `RIGHT` when there is none.
///
/// Pure form of the loop, without the input read or the final comparison.
pub fn lower_bound(image: &SearchImage, target: u64) -> u32 {
    converge(image.table(), image.right(), target, |_| {})
}

fn converge<F>(table: &SearchTable, right: u32, target: u64, mut on_probe: F) -> u32
where
    F: FnMut(Probe),
{
    let values = table.as_slice();
    let mut low = 0u32;
    let mut high = right;

    while low != high {
        // Same floor as (low + high) / 2 without u32 overflow
        let mid = low + (high - low) / 2;
        let value = values[mid as usize];
        let went_right = value < target;

        on_probe(Probe {
            low,
            high,
            mid,
            value,
            went_right,
        });

        if went_right {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    low
}

fn resolve(image: &SearchImage, low: u32, target: u64) -> u32 {
    match image.table().get(low) {
        Some(value) if value == target => low,
        _ => image.failed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, QueuedInput};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const FAILED: u32 = 0xFFFF_FFFF;

    fn scenario_image() -> SearchImage {
        let table = SearchTable::new(vec![2, 4, 6, 8, 10]).unwrap();
        SearchImage::with_exclusive_bound(table, FAILED).unwrap()
    }

    fn search(image: &SearchImage, target: u64) -> u32 {
        let mut input = QueuedInput::public(vec![target]);
        bsearch(image, &mut input).unwrap()
    }

    fn random_image(rng: &mut StdRng, exclusive: bool) -> SearchImage {
        let len = rng.gen_range(1..200);
        let mut values: Vec<u64> = (0..len).map(|_| rng.gen_range(0..500)).collect();
        values.sort_unstable();
        let table = SearchTable::new(values).unwrap();

        if exclusive {
            SearchImage::with_exclusive_bound(table, FAILED).unwrap()
        } else {
            let config = crate::SearchConfig {
                right: table.len() as u32 - 1,
                failed: FAILED,
            };
            SearchImage::new(config, table).unwrap()
        }
    }

    #[test]
    fn test_scenario() {
        let image = scenario_image();
        assert_eq!(search(&image, 6), 2);
        assert_eq!(search(&image, 5), FAILED);
        assert_eq!(search(&image, 2), 0);
        assert_eq!(search(&image, 10), 4);
    }

    #[test]
    fn test_above_maximum_is_guarded() {
        let image = scenario_image();
        assert_eq!(lower_bound(&image, 11), 5);
        assert_eq!(search(&image, 11), FAILED);
        assert_eq!(search(&image, u64::MAX), FAILED);
    }

    #[test]
    fn test_below_minimum() {
        let image = scenario_image();
        assert_eq!(search(&image, 0), FAILED);
        assert_eq!(search(&image, 1), FAILED);
    }

    #[test]
    fn test_sequential_image_reaches_last_element() {
        let image = SearchImage::sequential(16).unwrap();
        for v in 0..16u64 {
            assert_eq!(search(&image, v), v as u32);
        }
        assert_eq!(search(&image, 16), 16);
        assert_eq!(search(&image, 1_000), 16);
    }

    #[test]
    fn test_single_element() {
        let image = SearchImage::sequential(1).unwrap();
        assert_eq!(image.right(), 0);
        assert_eq!(search(&image, 0), 0);
        assert_eq!(search(&image, 1), 1);

        let table = SearchTable::new(vec![42]).unwrap();
        let image = SearchImage::with_exclusive_bound(table, FAILED).unwrap();
        assert_eq!(search(&image, 42), 0);
        assert_eq!(search(&image, 43), FAILED);
    }

    #[test]
    fn test_duplicates_return_leftmost() {
        let table = SearchTable::new(vec![1, 3, 3, 3, 3, 7]).unwrap();
        let image = SearchImage::with_exclusive_bound(table, FAILED).unwrap();
        assert_eq!(search(&image, 3), 1);
    }

    #[test]
    fn test_present_values_found() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for round in 0..200 {
            let image = random_image(&mut rng, round % 2 == 0);
            let values = image.table().as_slice();

            for &v in values {
                let index = search(&image, v);
                assert_ne!(index, FAILED, "value {} should be found", v);
                assert_eq!(values[index as usize], v);
                assert!(index == 0 || values[index as usize - 1] < v, "not leftmost");
            }
        }
    }

    #[test]
    fn test_absent_values_fail() {
        let mut rng = StdRng::seed_from_u64(0xabad1dea);

        for round in 0..200 {
            let image = random_image(&mut rng, round % 2 == 0);
            let values = image.table().as_slice();

            for v in image.table().first()..=image.table().last() {
                if values.binary_search(&v).is_err() {
                    assert_eq!(search(&image, v), FAILED, "value {} is absent", v);
                }
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let image = scenario_image();
        let mut input = QueuedInput::public(vec![8; 5]);

        let results: Vec<u32> = (0..5).map(|_| bsearch(&image, &mut input).unwrap()).collect();
        assert_eq!(results, vec![3; 5]);
    }

    #[test]
    fn test_reads_exactly_one_public_value() {
        let image = scenario_image();
        let mut input = QueuedInput::new(vec![4, 99], vec![7, 8]);

        assert_eq!(bsearch(&image, &mut input).unwrap(), 1);
        assert_eq!(input.consumed(Provenance::Public), 1);
        assert_eq!(input.consumed(Provenance::Private), 0);
        assert_eq!(input.remaining(Provenance::Private), 2);
    }

    #[test]
    fn test_exhausted_public_input() {
        let image = scenario_image();
        let mut input = QueuedInput::new(vec![], vec![6]);

        let result = bsearch(&image, &mut input);
        assert!(matches!(result, Err(Error::InputExhausted(Provenance::Public))));
    }

    #[test]
    fn test_traced_probes() {
        let image = scenario_image();
        let mut input = QueuedInput::public(vec![6]);

        let run = bsearch_traced(&image, &mut input).unwrap();
        assert_eq!(run.target, 6);
        assert_eq!(run.result, 2);
        assert!(run.found);

        // [0,5) -> mid 2 (6, stay) -> [0,2) -> mid 1 (4, right) -> [2,2)
        assert_eq!(
            run.probes,
            vec![
                Probe { low: 0, high: 5, mid: 2, value: 6, went_right: false },
                Probe { low: 0, high: 2, mid: 1, value: 4, went_right: true },
            ]
        );
    }

    #[test]
    fn test_traced_matches_plain() {
        let image = SearchImage::sequential(1_000).unwrap();

        for v in [0u64, 1, 499, 998, 999, 1_000, 5_000] {
            let plain = search(&image, v);
            let run = bsearch_traced(&image, &mut QueuedInput::public(vec![v])).unwrap();
            assert_eq!(run.result, plain);
            assert_eq!(run.found, plain != image.failed());
            assert!(run.probes.len() <= 10, "1000 entries need at most 10 probes");
        }
    }
}
