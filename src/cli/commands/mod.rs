pub mod clear;
pub mod delete;
pub mod demo;
pub mod edit;
pub mod export;
pub mod import_cmd;
pub mod list;
pub mod search;
pub mod show;
pub mod write;
