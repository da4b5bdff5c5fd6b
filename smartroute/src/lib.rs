pub mod app;
pub mod directions;
pub mod optimizer;
pub mod server;
