//! Default seed data loaded on startup and by `reset`.

use super::schema::{Assignment, FileSize, NodeCapacity};

const SEED_NODES: &[(&str, f64)] = &[
    ("node1", 1234.0),
    ("node2", 1432.0),
    ("node3", 999.0),
    ("node4", 111.0),
    ("node5", 888.0),
    ("node6", 222.0),
    ("node7", 777.0),
    ("node8", 333.0),
    ("node9", 667.0),
    ("node10", 444.0),
];

const SEED_FILES: &[(&str, f64)] = &[
    ("file1", 25.0),
    ("file2", 252.0),
    ("file3", 525.0),
    ("file4", 363.0),
    ("file5", 36.0),
    ("file6", 47.0),
    ("file7", 474.0),
    ("file8", 907.0),
    ("file9", 585.0),
    ("file10", 69.0),
    ("file11", 696.0),
];

const SEED_ASSIGNMENT: &[(&str, &str)] = &[
    ("file1", "node8"),
    ("file5", "node8"),
    ("file6", "node4"),
    ("file10", "node6"),
    ("file2", "node10"),
    ("file4", "node9"),
    ("file7", "node7"),
    ("file9", "node2"),
    ("file11", "node1"),
    ("file3", "node5"),
    ("file8", "node3"),
];

pub fn seed_nodes() -> NodeCapacity {
    SEED_NODES.iter().map(|&(id, capacity)| (id, capacity)).collect()
}

pub fn seed_files() -> FileSize {
    SEED_FILES.iter().map(|&(id, size)| (id, size)).collect()
}

pub fn seed_assignment() -> Assignment {
    SEED_ASSIGNMENT
        .iter()
        .map(|&(file, node)| (file, node.to_string()))
        .collect()
}
