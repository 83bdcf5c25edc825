use crate::domain::app::App;
use crate::ports::inbound::client::Client;
use crate::ports::outbound::avatar_store::AvatarStore;
use async_trait::async_trait;
use serenity::all::{ActivityData, GatewayIntents};
use serenity::Client as DiscordClient;
use std::env;

pub struct Discord(DiscordClient);

impl Discord {
    pub async fn new<AS>(app: App<AS>) -> Self
    where
        AS: AvatarStore + Send + Sync + 'static,
    {
        let token = env::var("BOT_TOKEN").expect("Bot token wasn't in env vars");
        let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

        let mut builder = DiscordClient::builder(&token, intents).event_handler(app);
        if let Ok(activity) = env::var("BOT_ACTIVITY") {
            builder = builder.activity(ActivityData::playing(activity));
        }
        let client = builder.await.expect("Error creating client");

        Self(client)
    }
}

#[async_trait]
impl Client for Discord {
    async fn run(&mut self) {
        if let Err(why) = self.0.start().await {
            log::error!("Error starting client - {why:?}");
        }
    }
}
