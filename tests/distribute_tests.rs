use judging_schedule::{ProjectRecord, distribute};

fn projects(count: usize) -> Vec<ProjectRecord> {
    (0..count)
        .map(|i| ProjectRecord::new(format!("Project {i}"), format!("https://devpost.com/p{i}")))
        .collect()
}

#[test]
fn round_robin_assignment_positions() {
    let groups = distribute(projects(10), 4);

    assert_eq!(groups.len(), 4);
    let sizes: Vec<usize> = groups.iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![3, 3, 2, 2]);

    // project i lands in group i % 4 at position i / 4
    for i in 0..10 {
        assert_eq!(groups[i % 4][i / 4].name, format!("Project {i}"));
    }
}

#[test]
fn group_sizes_differ_by_at_most_one() {
    for count in 0..25 {
        for n in 1..6 {
            let groups = distribute(projects(count), n);
            let total: usize = groups.iter().map(Vec::len).sum();
            assert_eq!(total, count);
            let max = groups.iter().map(Vec::len).max().unwrap();
            let min = groups.iter().map(Vec::len).min().unwrap();
            assert!(max - min <= 1, "uneven split for {count} projects, {n} groups");
        }
    }
}

#[test]
fn empty_project_list_yields_empty_groups() {
    let groups = distribute(Vec::new(), 3);
    assert_eq!(groups.len(), 3);
    assert!(groups.iter().all(Vec::is_empty));
}

#[test]
fn single_group_keeps_input_order() {
    let groups = distribute(projects(5), 1);
    assert_eq!(groups.len(), 1);
    let names: Vec<&str> = groups[0].iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Project 0", "Project 1", "Project 2", "Project 3", "Project 4"]
    );
}

#[test]
fn distribution_is_deterministic() {
    assert_eq!(distribute(projects(7), 3), distribute(projects(7), 3));
}
