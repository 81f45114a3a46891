/// Mixed allocation: round-robin interleaving across branches.
///
/// Groups are filled one at a time, in order. While the current group has
/// room, sweep the branches in ascending code order taking the front
/// student of each non-empty branch, stopping mid-sweep the moment the
/// group is full. A filled group is never revisited, and each branch is
/// consumed strictly front to back.
use super::plan;
use crate::error::Result;
use crate::model::{CategoryBuckets, Group, Student};
use std::collections::VecDeque;
use tracing::{debug, info};

pub fn allocate_mixed(buckets: &CategoryBuckets, num_groups: usize) -> Result<Vec<Group>> {
    let capacities = plan(buckets, num_groups)?;

    // Code order comes from the BTreeMap backing the buckets.
    let mut queues: Vec<VecDeque<&Student>> = buckets
        .iter()
        .map(|(_, students)| students.iter().collect())
        .collect();

    let mut groups = Vec::with_capacity(num_groups);
    for (idx, &cap) in capacities.iter().enumerate() {
        let mut group = Group::numbered(idx, cap);

        while group.len() < cap && queues.iter().any(|q| !q.is_empty()) {
            for queue in queues.iter_mut() {
                if group.len() >= cap {
                    break;
                }
                if let Some(student) = queue.pop_front() {
                    group.members.push(student.clone());
                }
            }
        }

        debug!(group = %group.name, size = group.len(), capacity = cap, "Filled mixed group");
        groups.push(group);
    }

    info!(
        students = buckets.total(),
        groups = groups.len(),
        "Mixed allocation complete"
    );
    Ok(groups)
}
