pub mod avatar_store;
pub mod guild_roles;
