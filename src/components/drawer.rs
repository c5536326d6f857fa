use crate::components::portal::{ContextBridge, PortalMount, PortalRoot};
use crate::utils::OpenState;
use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
struct DrawerScope(OpenState);

/// Shared-state accessor for the drawer family. The returned handle carries
/// all three entry points (`open`, `close`, `toggle`).
///
/// Panics when called outside a mounted [`Root`].
pub fn use_drawer() -> OpenState {
    use_hook(|| {
        try_consume_context::<DrawerScope>()
            .expect("use_drawer must be used within a drawer::Root")
            .0
    })
}

/// Owns the open/close state for one drawer instance. Initially closed.
#[component]
pub fn Root(children: Element) -> Element {
    use_context_provider(|| DrawerScope(OpenState::new()));

    rsx! {
        {children}
    }
}

/// Opens the drawer on click, then forwards the event to any caller-supplied
/// handler.
#[component]
pub fn Trigger(
    onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes, extends = button)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_drawer();

    rsx! {
        button {
            onclick: move |e| {
                state.open();
                if let Some(handler) = onclick {
                    handler.call(e);
                }
            },
            ..attributes,
            {children}
        }
    }
}

/// Visible only while open; the drawer panel docks to the right edge. Clicks
/// outside the panel close, clicks inside stop propagation.
#[component]
pub fn Content(
    #[props(extends = GlobalAttributes, extends = div)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_drawer();

    if !state.is_open() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "fixed inset-0 z-40",
            onclick: move |_| state.close(),

            div {
                role: "dialog",
                class: "absolute right-0 top-0 z-10 h-full",
                onclick: move |e| e.stop_propagation(),
                ..attributes,
                {children}
            }
        }
    }
}

/// Dimming backdrop, present only while open. The caller wires dismissal if
/// wanted.
#[component]
pub fn Overlay(
    onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes, extends = div)] attributes: Vec<Attribute>,
) -> Element {
    let state = use_drawer();

    if !state.is_open() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "fixed inset-0 h-full w-full overflow-hidden bg-black/20",
            onclick: move |e| {
                if let Some(handler) = onclick {
                    handler.call(e);
                }
            },
            ..attributes,
        }
    }
}

/// Always renders; closes the drawer on click. Consumers that want a
/// toggle control instead can wire one through `use_drawer().toggle()`.
#[component]
pub fn Close(
    #[props(extends = GlobalAttributes, extends = button)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_drawer();

    rsx! {
        button {
            onclick: move |_| state.close(),
            ..attributes,
            {children}
        }
    }
}

/// Ships children to `target` or the nearest ambient portal root, carrying
/// the drawer state across the relocation. Renders nothing when no root is
/// available.
#[component]
pub fn Portal(target: Option<PortalRoot>, children: Element) -> Element {
    let root = match target.or_else(try_consume_context::<PortalRoot>) {
        Some(root) => root,
        None => return rsx! {},
    };

    let content = match try_consume_context::<DrawerScope>() {
        Some(scope) => rsx! {
            ContextBridge { value: scope, {children} }
        },
        None => children,
    };

    rsx! {
        PortalMount { root, content }
    }
}
