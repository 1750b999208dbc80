use std::path::PathBuf;

pub fn get_test_fixture_path(fixture_name: Option<&str>) -> PathBuf {
    let suites = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("suites");
    match fixture_name {
        Some(fixture_name) => suites.join(fixture_name),
        None => suites,
    }
}
