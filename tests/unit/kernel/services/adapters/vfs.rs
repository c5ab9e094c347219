use super::*;
use serde_json::json;
use tempfile::tempdir;

fn names(entries: &[FsEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn normalize_collapses_segments() {
    assert_eq!(normalize_path("/a//b/./c").unwrap(), "/a/b/c");
    assert_eq!(normalize_path("a/b/../c").unwrap(), "/a/c");
    assert_eq!(normalize_path("/").unwrap(), "/");
    assert_eq!(normalize_path(" /App.jsx ").unwrap(), "/App.jsx");
}

#[test]
fn normalize_rejects_escaping_root_and_empty() {
    assert!(matches!(normalize_path("/.."), Err(FsError::InvalidPath(_))));
    assert!(matches!(normalize_path("   "), Err(FsError::InvalidPath(_))));
}

#[test]
fn create_file_creates_parents() {
    let mut fs = VirtualFileSystem::new();

    fs.create_file("/components/ui/Button.jsx", "export default 1;")
        .unwrap();

    assert!(fs.is_dir("/components"));
    assert!(fs.is_dir("/components/ui"));
    assert_eq!(
        fs.read_file("/components/ui/Button.jsx").unwrap(),
        "export default 1;"
    );
}

#[test]
fn create_file_rejects_duplicates_and_file_parents() {
    let mut fs = VirtualFileSystem::new();
    fs.create_file("/App.jsx", "").unwrap();

    assert_eq!(
        fs.create_file("/App.jsx", "x"),
        Err(FsError::AlreadyExists("/App.jsx".to_string()))
    );
    assert_eq!(
        fs.create_file("/App.jsx/child.js", ""),
        Err(FsError::NotADirectory("/App.jsx".to_string()))
    );
}

#[test]
fn list_dir_orders_directories_first() {
    let mut fs = VirtualFileSystem::new();
    fs.create_file("/b.js", "").unwrap();
    fs.create_file("/App.jsx", "").unwrap();
    fs.create_dir("/components").unwrap();
    fs.create_dir("/assets").unwrap();
    fs.create_file("/components/Card.jsx", "").unwrap();

    let root = fs.list_dir("/").unwrap();
    assert_eq!(names(&root), vec!["assets", "components", "App.jsx", "b.js"]);

    let components = fs.list_dir("/components").unwrap();
    assert_eq!(names(&components), vec!["Card.jsx"]);
    assert_eq!(components[0].path, "/components/Card.jsx");
}

#[test]
fn list_dir_errors() {
    let mut fs = VirtualFileSystem::new();
    fs.create_file("/App.jsx", "").unwrap();

    assert!(matches!(fs.list_dir("/missing"), Err(FsError::NotFound(_))));
    assert!(matches!(
        fs.list_dir("/App.jsx"),
        Err(FsError::NotADirectory(_))
    ));
}

#[test]
fn write_file_replaces_and_bumps_revision() {
    let mut fs = VirtualFileSystem::new();
    fs.write_file("/App.jsx", "a").unwrap();
    let rev = fs.revision();

    fs.write_file("/App.jsx", "a").unwrap();
    assert_eq!(fs.revision(), rev);

    fs.write_file("/App.jsx", "b").unwrap();
    assert_eq!(fs.read_file("/App.jsx").unwrap(), "b");
    assert!(fs.revision() > rev);

    assert!(matches!(fs.write_file("/", "x"), Err(FsError::IsADirectory(_))));
}

#[test]
fn delete_removes_subtree_and_clears_selection() {
    let mut fs = VirtualFileSystem::new();
    fs.create_file("/components/Card.jsx", "").unwrap();
    fs.create_file("/components-old.jsx", "").unwrap();
    fs.select_file("/components/Card.jsx").unwrap();

    fs.delete("/components").unwrap();

    assert!(!fs.exists("/components/Card.jsx"));
    assert!(fs.exists("/components-old.jsx"));
    assert_eq!(fs.selected_file(), None);
    assert!(matches!(fs.delete("/components"), Err(FsError::NotFound(_))));
    assert!(matches!(fs.delete("/"), Err(FsError::InvalidPath(_))));
}

#[test]
fn select_file_only_accepts_files() {
    let mut fs = VirtualFileSystem::new();
    fs.create_file("/src/App.jsx", "").unwrap();

    assert_eq!(fs.select_file("src/App.jsx"), Ok(true));
    assert_eq!(fs.select_file("/src/App.jsx"), Ok(false));
    assert_eq!(fs.selected_file(), Some("/src/App.jsx"));
    assert!(matches!(fs.select_file("/src"), Err(FsError::IsADirectory(_))));
    assert!(matches!(fs.select_file("/nope"), Err(FsError::NotFound(_))));
}

#[test]
fn project_data_round_trip() {
    let mut fs = VirtualFileSystem::new();
    fs.create_file("/App.jsx", "import Card from '@/components/Card';")
        .unwrap();
    fs.create_file("/components/Card.jsx", "export default () => null;")
        .unwrap();
    fs.create_dir("/empty").unwrap();

    let data = fs.serialize();
    assert_eq!(data["/App.jsx"]["type"], "file");
    assert_eq!(data["/components"]["type"], "directory");
    assert_eq!(data["/components/Card.jsx"]["name"], "Card.jsx");

    let restored = VirtualFileSystem::from_project_data(&data);
    assert_eq!(restored.serialize(), data);
    assert_eq!(restored.revision(), 0);
}

#[test]
fn project_data_skips_malformed_entries() {
    let data = json!({
        "/App.jsx": { "type": "file", "content": "hi" },
        "/weird": { "type": "symlink" },
        "/no-type": { "content": "x" },
        "/..": { "type": "file" },
        "/notes.md": { "type": "file" }
    });

    let fs = VirtualFileSystem::from_project_data(&data);

    assert_eq!(fs.read_file("/App.jsx").unwrap(), "hi");
    assert_eq!(fs.read_file("/notes.md").unwrap(), "");
    assert!(!fs.exists("/weird"));
    assert!(!fs.exists("/no-type"));
    assert_eq!(fs.len(), 2);
}

#[test]
fn project_data_that_is_not_an_object_yields_empty_fs() {
    assert!(VirtualFileSystem::from_project_data(&json!(null)).is_empty());
    assert!(VirtualFileSystem::from_project_data(&json!([1, 2])).is_empty());
}

#[test]
fn load_from_dir_mirrors_disk_and_honors_ignore_files() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    std::fs::create_dir_all(root.join("components")).unwrap();
    std::fs::write(root.join("App.jsx"), "export default function App() {}").unwrap();
    std::fs::write(root.join("components/Card.jsx"), "card").unwrap();
    std::fs::create_dir_all(root.join("node_modules/react")).unwrap();
    std::fs::write(root.join("node_modules/react/index.js"), "lib").unwrap();
    std::fs::write(root.join(".gitignore"), "node_modules\n").unwrap();
    std::fs::write(root.join("logo.bin"), [0xff, 0xfe, 0x00]).unwrap();

    let fs = VirtualFileSystem::load_from_dir(root).unwrap();

    assert_eq!(
        fs.read_file("/App.jsx").unwrap(),
        "export default function App() {}"
    );
    assert_eq!(fs.read_file("/components/Card.jsx").unwrap(), "card");
    assert!(!fs.exists("/node_modules"));
    assert!(!fs.exists("/logo.bin"));
}

#[test]
fn load_from_dir_requires_a_directory() {
    let dir = tempdir().unwrap();
    let err = VirtualFileSystem::load_from_dir(&dir.path().join("missing")).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}
