pub mod common;
pub mod diet;
