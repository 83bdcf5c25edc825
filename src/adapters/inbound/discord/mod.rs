pub mod client;
mod roles;

use crate::adapters::inbound::discord::roles::DiscordGuildRoles;
use crate::domain::app::App;
use crate::domain::avatar::AvatarEvent;
use crate::ports::outbound::avatar_store::AvatarStore;
use async_trait::async_trait;
use serenity::all::{Context, EventHandler, GuildMemberUpdateEvent, Member, Ready, User};

#[async_trait]
impl<AS> EventHandler for App<AS>
where
    AS: AvatarStore + Send + Sync,
{
    async fn ready(&self, _: Context, ready: Ready) {
        log::info!(
            "Bot ready as {}! Watching {} guilds",
            ready.user.name,
            self.guilds.len()
        );
    }

    async fn guild_member_update(
        &self,
        ctx: Context,
        old_if_available: Option<Member>,
        _new: Option<Member>,
        event: GuildMemberUpdateEvent,
    ) {
        let avatar_event = avatar_event(&event.user, old_if_available.as_ref().map(|m| &m.user));
        let roles = DiscordGuildRoles::new(ctx);
        self.sync_avatar(&roles, avatar_event).await;
    }
}

fn avatar_event(user: &User, previous: Option<&User>) -> AvatarEvent {
    AvatarEvent {
        member_id: user.id.get(),
        username: user.name.clone(),
        discriminator: user.discriminator.map(|d| d.get()),
        avatar_url: user.static_face(),
        avatar: user.avatar.as_ref().map(ToString::to_string),
        previous_avatar: previous.map(|old| old.avatar.as_ref().map(ToString::to_string)),
    }
}
