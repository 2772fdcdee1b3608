use crate::Cli;
use crate::commands::CommandEnum;
use clap::CommandFactory;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn global_flags_follow_the_subcommand() {
    let cli = Cli::try_parse_from([
        "graphql-assist",
        "lint",
        "queries/",
        "--schema",
        "schema.graphql,more.graphql",
        "--graphql-file-exts",
        "gql",
        "-v",
    ]).expect("arguments parse");

    assert!(cli.verbose);
    assert_eq!(
        cli.schema,
        vec![PathBuf::from("schema.graphql"), PathBuf::from("more.graphql")],
    );
    assert_eq!(cli.graphql_file_exts, vec!["gql".to_string()]);
    assert!(matches!(cli.cmd, Some(CommandEnum::Lint(_))));
}

#[test]
fn defaults() {
    let cli = Cli::try_parse_from(["graphql-assist", "complete"])
        .expect("arguments parse");

    assert!(!cli.verbose);
    assert!(cli.schema.is_empty());
    assert_eq!(cli.graphql_file_exts, vec!["graphql", "graphqls", "gql"]);
    assert!(matches!(cli.cmd, Some(CommandEnum::Complete(_))));
}

#[test]
fn lint_requires_paths() {
    assert!(Cli::try_parse_from(["graphql-assist", "lint"]).is_err());
}

#[test]
fn no_schema_loads_nothing() {
    let cli = Cli::try_parse_from(["graphql-assist"]).expect("arguments parse");
    assert!(cli.load_schema().expect("nothing to load").is_none());
}

#[test]
fn schema_directory_loads() {
    let fixtures_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../libgraphql-assist/fixtures");
    let cli = Cli::try_parse_from([
        "graphql-assist".into(),
        "--schema".into(),
        fixtures_dir.into_os_string(),
    ]).expect("arguments parse");

    let schema = cli.load_schema()
        .expect("schema loads")
        .expect("schema is present");
    assert!(schema.lookup_type("Article").is_some());
}
