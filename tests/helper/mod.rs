#![allow(dead_code)]

pub mod server;
pub mod sink;

pub use server::{registry_config, silent_server_url, unreachable_url};
pub use sink::CollectingSink;
