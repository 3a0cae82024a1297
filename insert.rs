// Rust-seqkit: Generic sequence algorithms.
// Copyright (c) 2026, the seqkit developers.
// See README.md and LICENSE.txt for details.

/// Returns a copy of `v` with `item` inserted right before index `position`.
/// A `position` past the end appends `item`.
pub fn insert_at<T: Clone>(item: T, position: usize, v: &[T]) -> Vec<T> {
    let k = position.min(v.len());
    let mut out = Vec::with_capacity(v.len() + 1);
    out.extend_from_slice(&v[..k]);
    out.push(item);
    out.extend_from_slice(&v[k..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    #[test]
    fn inserts_before_position() {
        let v = vec!["1", "2", "3", "4"];
        assert_eq!(insert_at("x", 2, &v), vec!["1", "2", "x", "3", "4"]);
        assert_eq!(v, vec!["1", "2", "3", "4"]);
        assert_eq!(insert_at("x", 0, &v), vec!["x", "1", "2", "3", "4"]);
        assert_eq!(insert_at("x", 4, &v), vec!["1", "2", "3", "4", "x"]);
    }

    #[test]
    fn past_the_end_appends() {
        assert_eq!(insert_at(9, 100, &[1, 2]), vec![1, 2, 9]);
        assert_eq!(insert_at(9, 3, &[]), vec![9]);
    }

    #[quickcheck]
    fn matches_vec_insert(a: Vec<u32>, k: usize, v: u32) -> TestResult {
        if k > a.len() {
            return TestResult::discard();
        }

        let mut b = a.clone();
        b.insert(k, v);
        TestResult::from_bool(insert_at(v, k, &a) == b)
    }
}
