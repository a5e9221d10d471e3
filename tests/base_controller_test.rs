mod helpers;

use std::sync::Arc;

use helpers::{settings_with, test_settings};
use mini_rag::presentation::BaseController;

fn controller(base: &std::path::Path) -> BaseController {
    BaseController::with_base_dir(Arc::new(test_settings()), base.to_path_buf())
}

#[test]
fn given_base_dir_when_creating_then_files_dir_is_under_assets() {
    let tmp = tempfile::tempdir().unwrap();

    let controller = controller(tmp.path());

    assert_eq!(controller.files_dir(), tmp.path().join("assets").join("files"));
    assert_eq!(controller.settings().app_name, "mini-rag");
}

#[test]
fn given_length_when_generating_random_string_then_uses_lowercase_and_digits() {
    let tmp = tempfile::tempdir().unwrap();
    let controller = controller(tmp.path());

    let value = controller.generate_random_string(12);

    assert_eq!(value.len(), 12);
    assert!(
        value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    );
    assert!(controller.generate_random_string(0).is_empty());
}

#[test]
fn given_project_id_when_resolving_files_dir_then_directory_is_created() {
    let tmp = tempfile::tempdir().unwrap();
    let controller = controller(tmp.path());

    let dir = controller
        .project_files_dir("project-1")
        .expect("directory should be created");

    assert!(dir.is_dir());
    assert!(dir.ends_with("project-1"));
}

#[test]
fn given_path_traversal_id_when_resolving_files_dir_then_rejects_it() {
    let tmp = tempfile::tempdir().unwrap();
    let controller = controller(tmp.path());

    let result = controller.project_files_dir("../escape");

    assert_eq!(
        result.unwrap_err().kind(),
        std::io::ErrorKind::InvalidInput
    );
}

#[test]
fn given_files_dir_setting_when_creating_then_it_overrides_the_default() {
    let tmp = tempfile::tempdir().unwrap();
    let files = tmp.path().join("uploads");
    let settings = settings_with(&[("FILES_DIR", files.to_str().unwrap())]);

    let controller = BaseController::new(Arc::new(settings)).expect("base dir should resolve");

    assert_eq!(controller.files_dir(), files);
    assert!(!controller.files_dir().starts_with(env!("CARGO_MANIFEST_DIR")));
    assert!(
        controller
            .project_files_dir("project-1")
            .unwrap()
            .starts_with(&files)
    );
}

#[test]
fn given_no_files_dir_setting_when_creating_then_resolves_from_working_directory() {
    let controller =
        BaseController::new(Arc::new(test_settings())).expect("base dir should resolve");

    let cwd = std::env::current_dir().unwrap();
    assert_eq!(controller.base_dir(), cwd);
    assert_eq!(controller.files_dir(), cwd.join("assets").join("files"));
}
