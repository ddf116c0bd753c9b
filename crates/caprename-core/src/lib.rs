pub mod config;
pub mod logging;

pub mod archive;
pub mod batch;
pub mod captioner;
pub mod slug;
