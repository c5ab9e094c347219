use super::*;
use crate::kernel::services::adapters::VirtualFileSystem;

fn sample_fs() -> VirtualFileSystem {
    let mut fs = VirtualFileSystem::new();
    fs.create_file("/App.jsx", "").unwrap();
    fs.create_file("/components/Card.jsx", "").unwrap();
    fs.create_file("/components/ui/Button.jsx", "").unwrap();
    fs
}

fn labels(rows: &[FileTreeRow]) -> Vec<(usize, &str)> {
    rows.iter().map(|r| (r.depth, r.name.as_str())).collect()
}

#[test]
fn flatten_expands_directories_by_default() {
    let fs = sample_fs();

    let rows = flatten_tree(&fs, &FxHashSet::default());

    assert_eq!(
        labels(&rows),
        vec![
            (0, "components"),
            (1, "ui"),
            (2, "Button.jsx"),
            (1, "Card.jsx"),
            (0, "App.jsx"),
        ]
    );
    assert!(rows[0].expanded);
    assert!(!rows[4].expanded);
}

#[test]
fn flatten_hides_children_of_collapsed_directories() {
    let fs = sample_fs();
    let mut collapsed = FxHashSet::default();
    collapsed.insert("/components/ui".to_string());

    let rows = flatten_tree(&fs, &collapsed);

    assert_eq!(
        labels(&rows),
        vec![(0, "components"), (1, "ui"), (1, "Card.jsx"), (0, "App.jsx")]
    );
    assert!(!rows[1].expanded);
}

#[test]
fn flatten_empty_fs_has_no_rows() {
    let fs = VirtualFileSystem::new();
    assert!(flatten_tree(&fs, &FxHashSet::default()).is_empty());
}
