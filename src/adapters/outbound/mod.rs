pub mod avatar_store;
