mod cli_tests;
mod graphql_files_tests;
