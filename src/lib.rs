pub mod config;
pub mod data_source;
pub mod graphql;
pub mod logging;
pub mod server;
pub mod shaping;
