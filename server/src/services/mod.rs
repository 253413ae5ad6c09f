//! Domain services used by websocket and HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own persistence and fan-out so route handlers stay
//! focused on protocol translation.

pub mod collection;
pub mod hub;
pub mod listener;
