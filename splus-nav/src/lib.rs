//! Navigation, theming and UI state for the Splus shell.
//!
//! Everything here is UI-agnostic: the desktop crate renders it, this crate
//! decides what is active, which colors apply and what gets remembered.

pub mod errors;
pub mod icons;
pub mod preferences;
pub mod recent;
pub mod resolver;
pub mod storage;
pub mod store;
pub mod taxonomy;
pub mod theme;

pub use errors::{NavigationError, StorageError, ThemeError};
pub use resolver::{Resolved, matches_path};
pub use store::NavigationState;
pub use taxonomy::{Cluster, Item, Section, Taxonomy};
pub use theme::{StyleVar, StyleVars, Theme};
