//! Test harness for CLI integration tests.
//!
//! Provides isolated test environments, programmatic article creation,
//! and CLI assertion helpers using `assert_cmd`.

mod article;
mod command;
mod env;

// Re-export main types for external use
#[allow(unused_imports)]
pub use article::TestArticle;
#[allow(unused_imports)]
pub use command::JotCommand;
#[allow(unused_imports)]
pub use env::TestEnv;
