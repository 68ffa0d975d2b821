//! Command implementations for toolhost CLI

pub mod completions;
pub mod exec;
pub mod helpers;
pub mod run;
pub mod tools;
pub mod version;
