pub mod config;
pub mod render;

pub use config::Config;
