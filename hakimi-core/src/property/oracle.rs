//! Erdős–Gallai graphicality test used as an independent oracle.

/// Returns `true` when `sequence` satisfies the Erdős–Gallai inequalities.
///
/// With degrees sorted descending, a sequence of non-negative integers with
/// even sum is graphic iff for every `k` in `1..=n`
/// `sum(d[..k]) <= k(k-1) + sum(min(d[i], k) for i >= k)`.
pub(super) fn erdos_gallai(sequence: &[i64]) -> bool {
    if sequence.iter().any(|&degree| degree < 0) {
        return false;
    }
    let mut sorted: Vec<i128> = sequence.iter().map(|&degree| i128::from(degree)).collect();
    sorted.sort_unstable_by(|left, right| right.cmp(left));
    if sorted.iter().sum::<i128>() % 2 != 0 {
        return false;
    }

    let mut head = 0_i128;
    for k in 1..=sorted.len() {
        head += sorted[k - 1];
        let bound = i128::try_from(k).unwrap_or(i128::MAX);
        let tail: i128 = sorted[k..].iter().map(|&degree| degree.min(bound)).sum();
        if head > bound * (bound - 1) + tail {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(&[], true)]
    #[case(&[0], true)]
    #[case(&[1, 1], true)]
    #[case(&[2, 2, 2], true)]
    #[case(&[3, 3, 3, 3], true)]
    #[case(&[3, 3, 3, 1], false)]
    #[case(&[4, 4, 4, 4], false)]
    #[case(&[5, 1, 1, 1, 1], false)]
    #[case(&[1, 1, 1], false)]
    #[case(&[-1, 1], false)]
    #[case(&[3, 3, 2, 2, 1, 1], true)]
    fn oracle_matches_hand_checked_sequences(#[case] sequence: &[i64], #[case] expected: bool) {
        assert_eq!(erdos_gallai(sequence), expected);
    }
}
