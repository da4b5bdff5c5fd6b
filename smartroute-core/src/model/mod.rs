pub mod route;
pub mod scoring;
pub mod store;
pub mod traffic;
