//! `invite-view` library crate.
//!
//! The invitation page as a state machine plus the async driver, HTTP
//! client and text renderer around it. The binary entrypoint lives in
//! `main.rs`.

pub mod client;
pub mod config;
pub mod driver;
pub mod error;
pub mod query;
pub mod render;
pub mod state;
