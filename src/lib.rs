pub mod config;
pub mod gateway;
pub mod notify;
pub mod routing;
pub mod server;
