pub mod app;
pub mod avatar;
pub mod colour;
pub mod functions;
pub mod palette;
pub mod role;
pub mod utils;
