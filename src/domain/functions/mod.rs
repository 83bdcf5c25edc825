pub mod avatar_sync;
pub mod colour_role;
