pub mod diet;
pub mod health;
pub mod server;
