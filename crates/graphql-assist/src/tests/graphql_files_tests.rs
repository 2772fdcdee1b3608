use crate::graphql_files::find_graphql_files;
use crate::graphql_files::has_graphql_ext;
use crate::graphql_files::normalize_exts;
use std::path::Path;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../libgraphql-assist/fixtures")
}

#[test]
fn exts_are_normalized() {
    let exts = normalize_exts(&[
        ".graphql".to_string(),
        "GQL".to_string(),
        " ".to_string(),
    ]);
    assert_eq!(exts.len(), 2);
    assert!(exts.contains("graphql"));
    assert!(exts.contains("gql"));
}

#[test]
fn matches_extension_case_insensitively() {
    let exts = normalize_exts(&["graphql".to_string()]);
    assert!(has_graphql_ext(Path::new("a/b.graphql"), &exts));
    assert!(has_graphql_ext(Path::new("a/b.GraphQL"), &exts));
    assert!(!has_graphql_ext(Path::new("a/b.json"), &exts));
    assert!(!has_graphql_ext(Path::new("a/graphql"), &exts));
}

#[test]
fn directories_are_walked() {
    let files = find_graphql_files(&[fixtures_dir()], &["graphql".to_string()])
        .expect("fixtures are readable");
    assert!(files.iter().any(|path| path.ends_with("blog.graphql")));
    assert!(files.iter().all(|path| path.is_absolute()));
}

#[test]
fn lone_file_is_kept_regardless_of_extension() {
    let blog = fixtures_dir().join("blog.graphql");
    let files = find_graphql_files(&[blog], &["gql".to_string()])
        .expect("fixture is readable");
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("blog.graphql"));
}

#[test]
fn missing_path_is_an_error() {
    let result = find_graphql_files(
        &[fixtures_dir().join("does-not-exist")],
        &["graphql".to_string()],
    );
    assert!(result.is_err());
}
