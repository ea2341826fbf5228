pub mod compare;
pub mod config;
pub mod error;
pub mod groups;
pub mod method;
pub mod table;
