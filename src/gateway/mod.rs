use std::fmt;

use async_trait::async_trait;

pub mod discord;

pub type DeliveryId = String;

/// An opaque delivery target the chat backend resolves to a live handle:
/// either a public channel id or a direct-message recipient (numeric user id
/// or a guild username).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Channel(String),
    Direct(String),
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Channel(id) => write!(f, "channel {id}"),
            Destination::Direct(recipient) => write!(f, "dm {recipient}"),
        }
    }
}

#[async_trait]
pub trait ChatGateway: Send + Sync {
    fn gateway_id(&self) -> &str;
    async fn send(&self, destination: &Destination, body: &str)
    -> Result<DeliveryId, anyhow::Error>;
}
