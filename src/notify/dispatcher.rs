use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::config::BotSettings;
use crate::gateway::{ChatGateway, DeliveryId, Destination};
use crate::notify::event::TournamentEvent;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("send to {destination} timed out after {timeout:?}")]
    Timeout {
        destination: Destination,
        timeout: Duration,
    },
    #[error("send to {destination} failed: {source}")]
    Delivery {
        destination: Destination,
        source: anyhow::Error,
    },
}

#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    pub tournament_channel: String,
    pub moderator: String,
    pub send_timeout: Duration,
}

impl DispatcherConfig {
    pub fn from_settings(settings: &BotSettings) -> Self {
        Self {
            tournament_channel: settings.tournament_channel.clone(),
            moderator: settings.moderator.clone(),
            send_timeout: settings.send_timeout,
        }
    }
}

/// Best-effort outbound notification dispatch. The gateway handle is shared
/// and read-only after startup; every send is an independent task. Failures
/// are logged and abandoned, never retried and never surfaced to the caller
/// that raised the domain event.
#[derive(Clone)]
pub struct Dispatcher {
    gateway: Arc<dyn ChatGateway>,
    config: DispatcherConfig,
}

impl Dispatcher {
    pub fn new(gateway: Arc<dyn ChatGateway>, config: DispatcherConfig) -> Self {
        Self { gateway, config }
    }

    pub fn moderator(&self) -> &str {
        &self.config.moderator
    }

    pub fn default_destination(&self) -> Destination {
        Destination::Channel(self.config.tournament_channel.clone())
    }

    /// Single delivery attempt with a bounded timeout. The failure path logs
    /// exactly once; `send_message` and `notify` rely on that and discard the
    /// result.
    pub async fn deliver(
        &self,
        destination: Destination,
        message: String,
    ) -> Result<DeliveryId, NotifyError> {
        let send_id = uuid::Uuid::new_v4();
        let attempt = self.gateway.send(&destination, &message);
        let result = match tokio::time::timeout(self.config.send_timeout, attempt).await {
            Ok(Ok(delivery_id)) => Ok(delivery_id),
            Ok(Err(source)) => Err(NotifyError::Delivery {
                destination,
                source,
            }),
            Err(_) => Err(NotifyError::Timeout {
                destination,
                timeout: self.config.send_timeout,
            }),
        };
        match &result {
            Ok(delivery_id) => {
                tracing::debug!(
                    gateway = self.gateway.gateway_id(),
                    send_id = %send_id,
                    delivery_id = %delivery_id,
                    "notification delivered"
                );
            }
            Err(err) => {
                tracing::error!(
                    gateway = self.gateway.gateway_id(),
                    send_id = %send_id,
                    error = %err,
                    "notification delivery failed"
                );
            }
        }
        result
    }

    /// Fire-and-forget. Calling twice sends twice; concurrent sends carry no
    /// ordering guarantee, even for the same destination.
    pub fn send_message(&self, destination: Destination, message: String) {
        let dispatcher = self.clone();
        tokio::spawn(async move {
            let _ = dispatcher.deliver(destination, message).await;
        });
    }

    pub fn notify(&self, event: TournamentEvent) {
        let message = match event.render() {
            Ok(message) => message,
            Err(err) => {
                tracing::error!(
                    event = event.name(),
                    error = %err,
                    "notification template rendering failed"
                );
                return;
            }
        };
        let destination = event.destination(&self.config.tournament_channel);
        self.send_message(destination, message);
    }
}
