pub mod balance;
pub mod call;
pub mod completions;
pub mod encode;
pub mod get;
pub mod init;
pub mod schema;
