pub mod cache;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod github;
pub mod models;
pub mod pager;
pub mod search;
