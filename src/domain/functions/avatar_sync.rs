use crate::domain::app::App;
use crate::domain::avatar::AvatarEvent;
use crate::domain::colour::{self, RoleColour};
use crate::domain::functions::colour_role;
use crate::domain::palette::{self, PaletteError, PALETTE_QUALITY, PALETTE_SIZE};
use crate::domain::role::{Membership, Role, RoleEdit};
use crate::ports::outbound::avatar_store::{AvatarRetrievalError, AvatarStore};
use crate::ports::outbound::guild_roles::{GuildRoles, PlatformError};
use serenity::futures::future::join_all;
use serenity::futures::FutureExt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ColourError {
    #[error(transparent)]
    Fetch(#[from] AvatarRetrievalError),
    #[error(transparent)]
    Palette(#[from] PaletteError),
    #[error("No eligible colours in the avatar's palette")]
    NoEligibleColour,
}

#[derive(Debug, Error)]
#[error("Failed to update colour for {tag} in {guild}: {source}")]
pub struct RoleUpdateError {
    tag: String,
    guild: String,
    source: PlatformError,
}

impl<AS> App<AS>
where
    AS: AvatarStore + Send + Sync,
{
    /// Recolours the member's colour role in every watched guild they're in.
    ///
    /// Roles are resolved per guild while the avatar colour is computed, and
    /// each role is edited once both it and the colour are ready. Syncs for
    /// the same member run one at a time.
    pub async fn sync_avatar<P>(&self, platform: &P, event: AvatarEvent)
    where
        P: GuildRoles + Sync,
    {
        let tag = event.tag();
        if event.is_unchanged() {
            log::debug!("Avatar unchanged for {tag}");
            return;
        }

        let lock = self.members.get(event.member_id);
        let _guard = lock.lock().await;
        if !self
            .members
            .record_avatar(event.member_id, event.avatar.as_deref())
        {
            log::debug!("Avatar already synced for {tag}");
            return;
        }

        let memberships = self.memberships(platform, event.member_id).await;
        if memberships.is_empty() {
            log::debug!("{tag} is not in any watched guild");
            return;
        }

        log::info!("Processing avatar: {tag} {}", event.avatar_url);

        let colour = self
            .avatar_colour(&event.avatar_url)
            .map(|result| match result {
                Ok(colour) => {
                    log::info!("Colour: {tag} {}", colour.name());
                    Some(colour)
                }
                Err(why) => {
                    log::warn!("No colour available for {tag}: {why}");
                    None
                }
            })
            .shared();

        let updates = join_all(memberships.iter().map(|membership| {
            let colour = colour.clone();
            let tag = tag.as_str();
            async move {
                let resolved = match colour_role::resolve(platform, membership, tag).await {
                    Ok(resolved) => resolved,
                    Err(why) => {
                        log::error!("{why}");
                        return;
                    }
                };

                let Some(colour) = colour.await else {
                    return;
                };

                if let Err(why) =
                    apply_colour(platform, membership.guild_id, resolved.role(), &colour, tag).await
                {
                    log::error!("{why}");
                }
            }
        }));

        tokio::join!(colour, updates);
    }

    async fn memberships<P>(&self, platform: &P, member_id: u64) -> Vec<Membership>
    where
        P: GuildRoles + Sync,
    {
        join_all(self.guilds.iter().map(|&guild_id| async move {
            match platform.member_role_ids(guild_id, member_id).await {
                Ok(Some(role_ids)) => Some(Membership {
                    guild_id,
                    member_id,
                    role_ids,
                }),
                Ok(None) => None,
                Err(why) => {
                    log::warn!(
                        "Couldn't check membership in {}: {why}",
                        platform.guild_name(guild_id)
                    );
                    None
                }
            }
        }))
        .await
        .into_iter()
        .flatten()
        .collect()
    }

    pub(crate) async fn avatar_colour(&self, url: &str) -> Result<RoleColour, ColourError> {
        let bytes = self.avatar_store.fetch(url).await?;
        let palette = tokio::task::spawn_blocking(move || {
            palette::extract(&bytes, PALETTE_SIZE, PALETTE_QUALITY)
        })
        .await
        .map_err(PaletteError::from)??;

        colour::select(&palette).ok_or(ColourError::NoEligibleColour)
    }
}

async fn apply_colour<P>(
    platform: &P,
    guild_id: u64,
    role: &Role,
    colour: &RoleColour,
    tag: &str,
) -> Result<Role, RoleUpdateError>
where
    P: GuildRoles + Sync,
{
    let edit = RoleEdit {
        name: Some(colour.name().to_string()),
        colour: Some(colour.value()),
    };

    platform
        .edit_role(guild_id, role.id, edit)
        .await
        .map_err(|source| RoleUpdateError {
            tag: tag.to_string(),
            guild: platform.guild_name(guild_id),
            source,
        })
}
