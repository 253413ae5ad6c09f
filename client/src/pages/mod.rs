//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state and orchestration and delegates
//! rendering details to `components`. Admin pages share the storage-flag
//! redirect from `util::auth`.

pub mod admin_dashboard;
pub mod admin_event_form;
pub mod admin_login;
pub mod admin_resource_form;
pub mod admin_seed_events;
pub mod contact;
pub mod event_register;
pub mod events;
pub mod history;
pub mod home;
pub mod not_found;
pub mod references;
pub mod resources;
