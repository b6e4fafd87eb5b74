pub mod activity;
pub mod app_info;
pub mod backends;
pub mod cmdargs;
pub mod config;
pub mod error;
pub mod logging;
pub mod service;
