pub mod drawer;
pub mod modal;
pub mod portal;

pub use portal::{use_portal_root, Portal, PortalOutlet, PortalProvider, PortalRoot};
