pub mod config;
pub mod count;
pub mod list;
pub mod version;
