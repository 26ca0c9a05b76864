//! The interactive shell around the service counter.
//!
//! `Session` runs the customer/staff menus, `Prompter` handles validated input
//! and `render` turns counter events into console lines.

pub mod menu;
pub mod prompt;
pub mod render;
pub mod session;

use crate::domain::queue::SnapshotOrder;
use render::DisplayFormat;

pub const DEFAULT_BANK_NAME: &str = "Karachi Bank";

/// Settings a session is started with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Shown in the welcome banner.
    pub bank_name: String,
    pub display_order: SnapshotOrder,
    pub format: DisplayFormat,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            bank_name: DEFAULT_BANK_NAME.to_string(),
            display_order: SnapshotOrder::default(),
            format: DisplayFormat::default(),
        }
    }
}
