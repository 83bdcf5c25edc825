use crate::domain::role::{Role, RoleEdit};
use async_trait::async_trait;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, derive(Clone))]
#[derive(Debug, Error)]
#[error("{0}")]
pub struct PlatformError(String);

impl PlatformError {
    #[must_use]
    pub fn new(msg: String) -> Self {
        Self(msg)
    }
}

/// Role operations against the chat platform, scoped by guild id.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GuildRoles {
    fn guild_name(&self, guild_id: u64) -> String;
    async fn list_roles(&self, guild_id: u64) -> Result<Vec<Role>, PlatformError>;
    /// `Ok(None)` when the user isn't a member of the guild.
    async fn member_role_ids(
        &self,
        guild_id: u64,
        member_id: u64,
    ) -> Result<Option<Vec<u64>>, PlatformError>;
    async fn self_role_ids(&self, guild_id: u64) -> Result<Vec<u64>, PlatformError>;
    /// Creates a role with no permissions.
    async fn create_role(&self, guild_id: u64, name: &str) -> Result<Role, PlatformError>;
    async fn assign_role(
        &self,
        guild_id: u64,
        member_id: u64,
        role_id: u64,
    ) -> Result<(), PlatformError>;
    async fn delete_role(&self, guild_id: u64, role_id: u64) -> Result<(), PlatformError>;
    async fn edit_role(
        &self,
        guild_id: u64,
        role_id: u64,
        edit: RoleEdit,
    ) -> Result<Role, PlatformError>;
    async fn set_role_position(
        &self,
        guild_id: u64,
        role_id: u64,
        position: u16,
    ) -> Result<(), PlatformError>;
}
