use crate::domain::role::{Role, RoleEdit};
use crate::ports::outbound::guild_roles::{GuildRoles, PlatformError};
use async_trait::async_trait;
use serenity::all::{Context, EditRole, GuildId, Member, Permissions, RoleId, UserId};
use serenity::http::HttpError;
use std::collections::HashMap;

const NOT_FOUND: u16 = 404;

pub struct DiscordGuildRoles {
    ctx: Context,
}

impl DiscordGuildRoles {
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }
}

fn to_role(role: serenity::all::Role) -> Role {
    Role {
        id: role.id.get(),
        guild_id: role.guild_id.get(),
        name: role.name,
        colour: role.colour.0,
        position: role.position,
    }
}

fn ids(role_ids: &[RoleId]) -> Vec<u64> {
    role_ids.iter().map(|id| id.get()).collect()
}

fn cached_role_ids(members: &HashMap<UserId, Member>, user_id: UserId) -> Option<Vec<u64>> {
    members.get(&user_id).map(|member| ids(&member.roles))
}

fn platform_error(why: serenity::Error) -> PlatformError {
    PlatformError::new(why.to_string())
}

#[async_trait]
impl GuildRoles for DiscordGuildRoles {
    fn guild_name(&self, guild_id: u64) -> String {
        GuildId::new(guild_id)
            .name(&self.ctx)
            .unwrap_or_else(|| guild_id.to_string())
    }

    async fn list_roles(&self, guild_id: u64) -> Result<Vec<Role>, PlatformError> {
        let roles = GuildId::new(guild_id)
            .roles(&self.ctx)
            .await
            .map_err(platform_error)?;

        Ok(roles.into_values().map(to_role).collect())
    }

    async fn member_role_ids(
        &self,
        guild_id: u64,
        member_id: u64,
    ) -> Result<Option<Vec<u64>>, PlatformError> {
        let (guild_id, user_id) = (GuildId::new(guild_id), UserId::new(member_id));

        let cached = self
            .ctx
            .cache
            .guild(guild_id)
            .and_then(|guild| cached_role_ids(&guild.members, user_id));
        if cached.is_some() {
            return Ok(cached);
        }

        match guild_id.member(&self.ctx, user_id).await {
            Ok(member) => Ok(Some(ids(&member.roles))),
            Err(serenity::Error::Http(HttpError::UnsuccessfulRequest(response)))
                if response.status_code.as_u16() == NOT_FOUND =>
            {
                Ok(None)
            }
            Err(why) => Err(platform_error(why)),
        }
    }

    async fn self_role_ids(&self, guild_id: u64) -> Result<Vec<u64>, PlatformError> {
        let own_id = self.ctx.cache.current_user().id;
        Ok(self
            .member_role_ids(guild_id, own_id.get())
            .await?
            .unwrap_or_default())
    }

    async fn create_role(&self, guild_id: u64, name: &str) -> Result<Role, PlatformError> {
        let builder = EditRole::new()
            .name(name)
            .permissions(Permissions::empty());

        GuildId::new(guild_id)
            .create_role(&self.ctx, builder)
            .await
            .map(to_role)
            .map_err(platform_error)
    }

    async fn assign_role(
        &self,
        guild_id: u64,
        member_id: u64,
        role_id: u64,
    ) -> Result<(), PlatformError> {
        self.ctx
            .http
            .add_member_role(
                GuildId::new(guild_id),
                UserId::new(member_id),
                RoleId::new(role_id),
                None,
            )
            .await
            .map_err(platform_error)
    }

    async fn delete_role(&self, guild_id: u64, role_id: u64) -> Result<(), PlatformError> {
        GuildId::new(guild_id)
            .delete_role(&self.ctx, RoleId::new(role_id))
            .await
            .map_err(platform_error)
    }

    async fn edit_role(
        &self,
        guild_id: u64,
        role_id: u64,
        edit: RoleEdit,
    ) -> Result<Role, PlatformError> {
        let mut builder = EditRole::new();
        if let Some(name) = edit.name {
            builder = builder.name(name);
        }
        if let Some(colour) = edit.colour {
            builder = builder.colour(colour);
        }

        GuildId::new(guild_id)
            .edit_role(&self.ctx, RoleId::new(role_id), builder)
            .await
            .map(to_role)
            .map_err(platform_error)
    }

    async fn set_role_position(
        &self,
        guild_id: u64,
        role_id: u64,
        position: u16,
    ) -> Result<(), PlatformError> {
        GuildId::new(guild_id)
            .edit_role_position(&self.ctx, RoleId::new(role_id), position)
            .await
            .map(|_| ())
            .map_err(platform_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncached_member_has_no_roles() {
        let members = HashMap::new();
        assert_eq!(cached_role_ids(&members, UserId::new(42)), None);
    }

    #[test]
    fn test_role_ids_unwrapped() {
        let role_ids = [RoleId::new(10), RoleId::new(14)];
        assert_eq!(ids(&role_ids), vec![10, 14]);
    }
}
