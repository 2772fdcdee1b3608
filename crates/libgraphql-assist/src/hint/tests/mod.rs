mod complete_tests;
mod cursor_token_tests;
