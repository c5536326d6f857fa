use dioxus::prelude::*;

/// Visibility flag shared by one compound-component family instance.
///
/// A `Root` creates one of these on mount and hands the same handle to every
/// descendant through context. The handle is `Copy`; copying it never copies
/// the flag itself, only the reference to the underlying signal.
#[derive(Clone, Copy, PartialEq)]
pub struct OpenState {
    visible: Signal<bool>,
}

impl OpenState {
    /// Must be called inside a component scope so the signal is owned by it
    /// and dropped with it.
    pub(crate) fn new() -> Self {
        Self {
            visible: Signal::new(false),
        }
    }

    pub fn is_open(&self) -> bool {
        *self.visible.read()
    }

    /// Transition to open. Idempotent if already open.
    pub fn open(&mut self) {
        self.visible.set(true);
    }

    /// Transition to closed. Idempotent if already closed.
    pub fn close(&mut self) {
        self.visible.set(false);
    }

    pub fn toggle(&mut self) {
        let open = *self.visible.peek();
        self.visible.set(!open);
    }
}
