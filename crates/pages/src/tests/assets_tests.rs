use super::*;

use std::{
    env, fs,
    time::{SystemTime, UNIX_EPOCH},
};

fn temp_root(label: &str) -> PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let root = env::temp_dir().join(format!("mlops_showcase_{label}_{suffix}"));
    fs::create_dir_all(root.join("reports")).expect("temp root");
    root
}

#[test]
fn rejects_paths_outside_the_root() {
    let store = AssetStore::new("/srv/assets");
    for path in ["../secret.html", "/etc/passwd", "images/../../x.png", ""] {
        let err = store.resolve(path).expect_err("should be rejected");
        assert!(matches!(err, AssetError::EscapesRoot { .. }), "{path}");
    }
    assert_eq!(
        store.resolve("images/data.png").expect("resolve"),
        PathBuf::from("/srv/assets/images/data.png")
    );
}

#[test]
fn missing_file_reports_relative_path() {
    let root = temp_root("missing");
    let store = AssetStore::new(&root);

    let err = store
        .ensure_exists("images/nope.png")
        .expect_err("should be missing");
    assert!(matches!(err, AssetError::Missing { .. }));
    assert_eq!(err.path(), "images/nope.png");

    let err = store
        .read_to_string("reports/nope.html")
        .expect_err("should be missing");
    assert!(matches!(err, AssetError::Missing { .. }));

    fs::remove_dir_all(root).expect("cleanup");
}

#[test]
fn directory_is_not_an_asset() {
    let root = temp_root("dir");
    let store = AssetStore::new(&root);
    let err = store.ensure_exists("reports").expect_err("dir is not a file");
    assert!(matches!(err, AssetError::Missing { .. }));
    fs::remove_dir_all(root).expect("cleanup");
}

#[test]
fn reads_file_contents_verbatim() {
    let root = temp_root("read");
    let body = "<p>drift\r\n  &amp; more</p>\n";
    fs::write(root.join("reports").join("r.html"), body).expect("write");

    let store = AssetStore::new(&root);
    assert_eq!(store.read_to_string("reports/r.html").expect("read"), body);

    fs::remove_dir_all(root).expect("cleanup");
}
