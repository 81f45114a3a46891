/// Uniform allocation: contiguous blocks, largest branch first.
///
/// Branches are ordered by size descending (ties by ascending code) and
/// laid end to end. A cursor walks the groups in order: once the current
/// group reaches its capacity the cursor moves on. Large branches therefore
/// dominate the low-numbered groups and no group interleaves branches.
use super::plan;
use crate::error::{GroupError, Result};
use crate::model::{Category, CategoryBuckets, Group, Student};
use tracing::{debug, info};

pub fn allocate_uniform(buckets: &CategoryBuckets, num_groups: usize) -> Result<Vec<Group>> {
    let capacities = plan(buckets, num_groups)?;
    let total = buckets.total();

    info!(
        students = total,
        base_size = total / num_groups,
        larger_groups = total % num_groups,
        ?capacities,
        "Uniform capacity plan"
    );

    let groups = fill_blocks(&buckets.by_size_desc(), &capacities)?;

    info!(
        students = total,
        groups = groups.len(),
        "Uniform allocation complete"
    );
    Ok(groups)
}

/// Lay `ordered` branches end to end across groups of the given capacities.
///
/// Fails with [`GroupError::Overflow`] if students remain after the last
/// group is full; the run is aborted rather than dropping anyone.
fn fill_blocks(ordered: &[(&Category, &[Student])], capacities: &[usize]) -> Result<Vec<Group>> {
    let total: usize = ordered.iter().map(|(_, s)| s.len()).sum();
    let mut groups: Vec<Group> = capacities
        .iter()
        .enumerate()
        .map(|(idx, &cap)| Group::numbered(idx, cap))
        .collect();

    let mut cursor = 0usize;
    let mut count = 0usize;
    let mut placed = 0usize;

    for (code, students) in ordered {
        debug!(branch = %code, size = students.len(), "Placing branch block");
        for student in students.iter() {
            // `while` skips zero-capacity groups too.
            while capacities.get(cursor).is_some_and(|&cap| count >= cap) {
                cursor += 1;
                count = 0;
            }
            let Some(group) = groups.get_mut(cursor) else {
                return Err(GroupError::Overflow {
                    remaining: total - placed,
                    groups: capacities.len(),
                });
            };
            group.members.push(student.clone());
            count += 1;
            placed += 1;
        }
    }

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{buckets, names, sizes};
    use super::*;

    /// A: 4, B: 2 into two groups of three.
    #[test]
    fn two_branch_scenario() {
        let groups = allocate_uniform(&buckets(&[("A", 4), ("B", 2)]), 2).unwrap();
        assert_eq!(names(&groups[0]), ["A1", "A2", "A3"]);
        assert_eq!(names(&groups[1]), ["A4", "B1", "B2"]);
    }

    #[test]
    fn largest_branch_goes_first() {
        let groups = allocate_uniform(&buckets(&[("A", 1), ("B", 3), ("C", 2)]), 3).unwrap();
        assert_eq!(names(&groups[0]), ["B1", "B2"]);
        assert_eq!(names(&groups[1]), ["B3", "C1"]);
        assert_eq!(names(&groups[2]), ["C2", "A1"]);
    }

    #[test]
    fn equal_sizes_fall_back_to_code_order() {
        let groups = allocate_uniform(&buckets(&[("ME", 2), ("CE", 2)]), 1).unwrap();
        assert_eq!(names(&groups[0]), ["CE1", "CE2", "ME1", "ME2"]);
    }

    #[test]
    fn remainder_goes_to_leading_groups() {
        let groups = allocate_uniform(&buckets(&[("A", 6), ("B", 4)]), 3).unwrap();
        assert_eq!(sizes(&groups), [4, 3, 3]);
    }

    #[test]
    fn more_groups_than_students_leaves_trailing_groups_empty() {
        let groups = allocate_uniform(&buckets(&[("A", 2), ("B", 1)]), 5).unwrap();
        assert_eq!(sizes(&groups), [1, 1, 1, 0, 0]);
        assert_eq!(names(&groups[2]), ["B1"]);
    }

    /// Flattening the groups must reproduce the branches laid end to end:
    /// no interleaving, no reordering.
    #[test]
    fn groups_are_contiguous_runs() {
        let input = buckets(&[("A", 7), ("B", 4), ("C", 9), ("D", 1)]);
        let expected: Vec<&str> = input
            .by_size_desc()
            .into_iter()
            .flat_map(|(_, s)| s.iter().map(|st| st.roll.as_str()))
            .collect();

        for n in 1..=8 {
            let groups = allocate_uniform(&input, n).unwrap();
            let flat: Vec<&str> = groups
                .iter()
                .flat_map(|g| g.members.iter().map(|st| st.roll.as_str()))
                .collect();
            assert_eq!(flat, expected, "n={n}");

            let s = sizes(&groups);
            assert!(s.iter().max().unwrap() - s.iter().min().unwrap() <= 1, "n={n}");
        }
    }

    /// Capacities that cannot hold every student abort with Overflow.
    #[test]
    fn capacity_mismatch_is_overflow() {
        let input = buckets(&[("A", 3), ("B", 2)]);
        let ordered = input.by_size_desc();
        let err = fill_blocks(&ordered, &[2, 2]).unwrap_err();
        assert!(matches!(
            err,
            GroupError::Overflow {
                remaining: 1,
                groups: 2
            }
        ));
    }
}
