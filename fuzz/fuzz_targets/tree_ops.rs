//! Fuzz harness for segment tree operations
//!
//! This harness drives arbitrary build/update/query sequences decoded
//! from raw bytes and cross-checks every result against a naive
//! recomputation over a plain vector.
//! Target: SegmentTree build, update, range_sum

#![no_main]

use libfuzzer_sys::fuzz_target;
use segsum_tree::SegmentTree;

fuzz_target!(|data: &[u8]| {
    let Some((&n, rest)) = data.split_first() else {
        return;
    };
    let n = (n as usize % 32) + 1;
    if rest.len() < n {
        return;
    }

    let (raw, ops) = rest.split_at(n);
    let mut values: Vec<i64> = raw.iter().map(|&b| b as i8 as i64).collect();
    let mut tree = SegmentTree::from_slice(&values).unwrap();

    for chunk in ops.chunks_exact(3) {
        match chunk[0] % 3 {
            0 => {
                let (left, right) = (chunk[1] as usize, chunk[2] as usize);
                let naive: i64 = values
                    .iter()
                    .skip(left)
                    .take((right + 1).saturating_sub(left))
                    .sum();
                assert_eq!(tree.range_sum(left, right), naive);
            }
            1 => {
                let index = chunk[1] as usize;
                let diff = chunk[2] as i8 as i64;
                tree.update(index, diff);
                if index < values.len() {
                    values[index] += diff;
                }
            }
            _ => {
                assert_eq!(tree.total(), values.iter().sum::<i64>());
            }
        }
    }
});
