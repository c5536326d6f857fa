//! Compound overlay components for Dioxus: a Modal and a Drawer built from
//! small composable pieces (`Root`, `Trigger`, `Content`, `Overlay`, `Close`,
//! `Portal`) that share one open/close state per mounted `Root`, plus a
//! portal mechanism for rendering a subtree outside its normal parent.

pub mod components;
pub mod utils;

pub use components::{use_portal_root, Portal, PortalOutlet, PortalProvider, PortalRoot};
pub use utils::OpenState;
