use crate::project::ProjectRecord;

/// Distribute projects round-robin: the project at input position `i` is
/// appended to group `i % group_count`. Group sizes differ by at most one
/// when the total is not divisible; that imbalance is accepted behavior.
pub fn distribute(projects: Vec<ProjectRecord>, group_count: usize) -> Vec<Vec<ProjectRecord>> {
    let mut groups: Vec<Vec<ProjectRecord>> = vec![Vec::new(); group_count];
    if group_count == 0 {
        return groups;
    }
    for (index, project) in projects.into_iter().enumerate() {
        groups[index % group_count].push(project);
    }
    groups
}
