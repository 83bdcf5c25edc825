pub const COLOUR_ROLE_PREFIX: char = '#';
pub const PLACEHOLDER_NAME: &str = "#??????";

#[derive(Debug, Clone)]
pub struct Role {
    pub id: u64,
    pub guild_id: u64,
    pub name: String,
    pub colour: u32,
    pub position: u16,
}

impl Role {
    #[must_use]
    pub fn is_colour_role(&self) -> bool {
        self.name.starts_with(COLOUR_ROLE_PREFIX)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RoleEdit {
    pub name: Option<String>,
    pub colour: Option<u32>,
}

/// A member's role ids within one watched guild.
#[derive(Debug, Clone)]
pub struct Membership {
    pub guild_id: u64,
    pub member_id: u64,
    pub role_ids: Vec<u64>,
}

#[derive(Debug)]
pub enum ResolvedRole {
    Existing(Role),
    Created(Role),
}

impl ResolvedRole {
    #[must_use]
    pub fn role(&self) -> &Role {
        match self {
            ResolvedRole::Existing(role) | ResolvedRole::Created(role) => role,
        }
    }
}

#[cfg(test)]
pub(crate) fn test_role(id: u64, name: &str, position: u16) -> Role {
    Role {
        id,
        guild_id: 1,
        name: name.to_string(),
        colour: 0,
        position,
    }
}
