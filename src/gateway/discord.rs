use std::sync::{Arc, Mutex};

use anyhow::Context as _;
use async_trait::async_trait;
use serenity::all::{ChannelId, Context, EventHandler, GatewayIntents, GuildId, Ready, UserId};
use serenity::builder::CreateMessage;
use serenity::http::Http;
use tokio::sync::oneshot;

use crate::config::BotSettings;
use crate::gateway::{ChatGateway, DeliveryId, Destination};

/// Long-lived Discord session. Built once at startup; `connect` returns only
/// after the gateway has signalled ready, so every handle in circulation is
/// usable.
pub struct DiscordGateway {
    http: Arc<Http>,
    guild_id: Option<GuildId>,
}

struct ReadySignal {
    tx: Mutex<Option<oneshot::Sender<String>>>,
}

#[serenity::async_trait]
impl EventHandler for ReadySignal {
    async fn ready(&self, _ctx: Context, data: Ready) {
        let sender = self.tx.lock().expect("ready signal mutex poisoned").take();
        if let Some(tx) = sender {
            let _ = tx.send(data.user.name.clone());
        }
    }
}

impl DiscordGateway {
    pub async fn connect(settings: &BotSettings) -> Result<Self, anyhow::Error> {
        let intents = GatewayIntents::GUILDS
            | GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::GUILD_MEMBERS;
        let (ready_tx, ready_rx) = oneshot::channel();
        let handler = ReadySignal {
            tx: Mutex::new(Some(ready_tx)),
        };
        let mut client = serenity::Client::builder(&settings.token, intents)
            .event_handler(handler)
            .await
            .context("failed to build discord client")?;
        let http = Arc::clone(&client.http);

        // Validates the credential up front so an operator can tell a bad
        // token apart from a gateway outage.
        http.get_current_user()
            .await
            .context("discord rejected the bot token")?;

        tokio::spawn(async move {
            if let Err(err) = client.start().await {
                tracing::error!(error = %err, "discord gateway connection ended");
            }
        });

        let bot_name = tokio::time::timeout(settings.ready_timeout, ready_rx)
            .await
            .context("timed out waiting for discord ready signal")?
            .context("discord gateway exited before signalling ready")?;
        tracing::info!(bot = %bot_name, "discord gateway ready");

        Ok(Self {
            http,
            guild_id: settings.guild_id.map(GuildId::new),
        })
    }

    async fn resolve_user(&self, recipient: &str) -> Result<UserId, anyhow::Error> {
        if let Ok(id) = recipient.parse::<u64>() {
            if id != 0 {
                return Ok(UserId::new(id));
            }
        }
        let guild_id = self.guild_id.ok_or_else(|| {
            anyhow::anyhow!("no guild configured, cannot look up username '{recipient}'")
        })?;
        let members = guild_id
            .search_members(&self.http, recipient, Some(1))
            .await
            .with_context(|| format!("member search for '{recipient}' failed"))?;
        members
            .first()
            .map(|member| member.user.id)
            .ok_or_else(|| anyhow::anyhow!("user '{recipient}' not found in guild"))
    }
}

#[async_trait]
impl ChatGateway for DiscordGateway {
    fn gateway_id(&self) -> &str {
        "discord"
    }

    async fn send(
        &self,
        destination: &Destination,
        body: &str,
    ) -> Result<DeliveryId, anyhow::Error> {
        match destination {
            Destination::Channel(id) => {
                let channel_id = id
                    .parse::<u64>()
                    .ok()
                    .filter(|id| *id != 0)
                    .with_context(|| format!("invalid channel id '{id}'"))?;
                let message = ChannelId::new(channel_id)
                    .say(&self.http, body)
                    .await
                    .with_context(|| format!("failed to post to channel {id}"))?;
                Ok(message.id.to_string())
            }
            Destination::Direct(recipient) => {
                let user_id = self.resolve_user(recipient).await?;
                let user = user_id
                    .to_user(&self.http)
                    .await
                    .with_context(|| format!("failed to fetch user {user_id}"))?;
                let message = user
                    .direct_message(&self.http, CreateMessage::new().content(body))
                    .await
                    .with_context(|| format!("failed to DM '{recipient}'"))?;
                Ok(message.id.to_string())
            }
        }
    }
}
