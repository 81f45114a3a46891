/// Target group sizes for a run.
use crate::error::{GroupError, Result};

/// Split `total` students into `num_groups` capacities that differ by at
/// most one. The first `total % num_groups` groups take the extra student.
///
/// `num_groups == 0` is a configuration error.
pub fn group_capacities(total: usize, num_groups: usize) -> Result<Vec<usize>> {
    if num_groups == 0 {
        return Err(GroupError::Config {
            requested: num_groups,
        });
    }

    let base = total / num_groups;
    let remainder = total % num_groups;
    Ok((0..num_groups)
        .map(|i| base + usize::from(i < remainder))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_split() {
        assert_eq!(group_capacities(6, 2).unwrap(), vec![3, 3]);
    }

    #[test]
    fn remainder_goes_to_leading_groups() {
        assert_eq!(group_capacities(10, 3).unwrap(), vec![4, 3, 3]);
        assert_eq!(group_capacities(11, 3).unwrap(), vec![4, 4, 3]);
    }

    #[test]
    fn more_groups_than_students() {
        assert_eq!(group_capacities(2, 4).unwrap(), vec![1, 1, 0, 0]);
    }

    #[test]
    fn capacities_sum_to_total_and_are_balanced() {
        for total in 0..40 {
            for n in 1..12 {
                let caps = group_capacities(total, n).unwrap();
                assert_eq!(caps.len(), n);
                assert_eq!(caps.iter().sum::<usize>(), total);
                let max = caps.iter().max().copied().unwrap_or(0);
                let min = caps.iter().min().copied().unwrap_or(0);
                assert!(max - min <= 1, "total={total} n={n} caps={caps:?}");
            }
        }
    }

    #[test]
    fn zero_groups_is_config_error() {
        assert!(matches!(
            group_capacities(5, 0),
            Err(GroupError::Config { requested: 0 })
        ));
    }
}
