pub mod auth;
pub mod navigation;
pub mod routes;
pub mod session;
