//! Page-scoped application state.
//!
//! ARCHITECTURE
//! ============
//! Pages hold these structs in `RwSignal`s. Pure update/query methods live
//! here so filtering and lookup stay testable without a browser.

pub mod events;
pub mod resources;
