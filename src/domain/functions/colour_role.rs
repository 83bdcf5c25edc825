use crate::domain::role::{Membership, ResolvedRole, Role, PLACEHOLDER_NAME};
use crate::ports::outbound::guild_roles::{GuildRoles, PlatformError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoleProvisionError {
    #[error("Failed to look up roles for {tag} in {guild}: {source}")]
    Lookup {
        tag: String,
        guild: String,
        source: PlatformError,
    },
    #[error("Failed to create role for {tag} in {guild}: {source}")]
    Create {
        tag: String,
        guild: String,
        source: PlatformError,
    },
    #[error("Failed to add role to {tag} in {guild}: {source}")]
    Assign {
        tag: String,
        guild: String,
        source: PlatformError,
    },
    #[error("Failed to set role position for {tag} in {guild}: {source}")]
    Position {
        tag: String,
        guild: String,
        source: PlatformError,
    },
}

fn held<'a>(roles: &'a [Role], ids: &'a [u64]) -> impl Iterator<Item = &'a Role> {
    ids.iter()
        .filter_map(|id| roles.iter().find(|role| role.id == *id))
}

/// Finds the member's colour role in the guild, or creates, assigns and
/// positions a new one directly below the bot's highest role.
///
/// An existing colour role is returned as is, without checking its position.
/// A created role that can't be assigned is deleted again.
pub async fn resolve<P>(
    platform: &P,
    membership: &Membership,
    tag: &str,
) -> Result<ResolvedRole, RoleProvisionError>
where
    P: GuildRoles + Sync,
{
    let Membership {
        guild_id,
        member_id,
        role_ids,
    } = membership;
    let context = || (tag.to_string(), platform.guild_name(*guild_id));

    let roles = platform.list_roles(*guild_id).await.map_err(|source| {
        let (tag, guild) = context();
        RoleProvisionError::Lookup { tag, guild, source }
    })?;

    if let Some(existing) = held(&roles, role_ids).find(|role| role.is_colour_role()) {
        return Ok(ResolvedRole::Existing(existing.clone()));
    }

    let own_role_ids = platform.self_role_ids(*guild_id).await.map_err(|source| {
        let (tag, guild) = context();
        RoleProvisionError::Lookup { tag, guild, source }
    })?;
    let highest = held(&roles, &own_role_ids)
        .map(|role| role.position)
        .max()
        .unwrap_or(0);

    let created = platform
        .create_role(*guild_id, PLACEHOLDER_NAME)
        .await
        .map_err(|source| {
            let (tag, guild) = context();
            RoleProvisionError::Create { tag, guild, source }
        })?;

    if let Err(source) = platform.assign_role(*guild_id, *member_id, created.id).await {
        let (tag, guild) = context();
        // Otherwise the next attempt creates another role and this one leaks
        if let Err(why) = platform.delete_role(*guild_id, created.id).await {
            log::warn!("Failed to delete unassigned role {} in {guild}: {why}", created.id);
        }
        return Err(RoleProvisionError::Assign { tag, guild, source });
    }

    platform
        .set_role_position(*guild_id, created.id, highest.saturating_sub(1))
        .await
        .map_err(|source| {
            let (tag, guild) = context();
            RoleProvisionError::Position { tag, guild, source }
        })?;

    Ok(ResolvedRole::Created(created))
}
