//! Screen-state engine for a food delivery client.
//!
//! A single [`RootStore`](root::RootStore) folds messages into an immutable
//! [`RootState`](root::RootState), publishes each new state, and hands the
//! effects it produced to concurrent handlers that talk to the repositories.

pub mod config;
pub mod logging;
pub mod mvi;
pub mod repository;
pub mod root;
pub mod screens;
pub mod session;

pub use session::Session;
