pub mod client;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod protocol;
pub mod survey;
