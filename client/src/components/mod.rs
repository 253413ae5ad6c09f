//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome (header, footer) and list/form building
//! blocks. They receive data through props; pages own the state.

pub mod category_chips;
pub mod event_card;
pub mod footer;
pub mod nav_header;
pub mod resource_card;
pub mod success_banner;
