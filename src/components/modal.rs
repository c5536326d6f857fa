use crate::components::portal::{ContextBridge, PortalMount, PortalRoot};
use crate::utils::OpenState;
use dioxus::prelude::*;

/// Context marker so a modal's state never collides with a drawer's.
#[derive(Clone, Copy, PartialEq)]
struct ModalScope(OpenState);

/// Shared-state accessor for the modal family.
///
/// Panics when called outside a mounted [`Root`]; that is a contract
/// violation, not a recoverable error.
pub fn use_modal() -> OpenState {
    use_hook(|| {
        try_consume_context::<ModalScope>()
            .expect("use_modal must be used within a modal::Root")
            .0
    })
}

/// Owns the open/close state for one modal instance and exposes it to every
/// descendant. Initially closed.
#[component]
pub fn Root(children: Element) -> Element {
    use_context_provider(|| ModalScope(OpenState::new()));

    rsx! {
        {children}
    }
}

/// Opens the modal on click, then forwards the event to any caller-supplied
/// handler. Already-open stays open.
#[component]
pub fn Trigger(
    onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes, extends = button)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_modal();

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

/// Visible only while open. The outer layer catches clicks outside the
/// content region and closes; clicks inside the region stop propagation and
/// cause no transition. The catcher mounts and unmounts with the content.
#[component]
pub fn Content(
    #[props(extends = GlobalAttributes, extends = div)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_modal();

    if !state.is_open() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "fixed inset-0 z-40 flex items-center justify-center",
            onclick: move |_| state.close(),

            div {
                class: "relative z-10",
                onclick: move |e| e.stop_propagation(),
                ..attributes,
                {children}
            }
        }
    }
}

/// Dimming backdrop, present only while open. Purely presentational; pass an
/// `onclick` that closes if that is the composition you want.
#[component]
pub fn Overlay(
    onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes, extends = div)] attributes: Vec<Attribute>,
) -> Element {
    let state = use_modal();

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

/// Always renders; closes the modal on click.
#[component]
pub fn Close(
    #[props(extends = GlobalAttributes, extends = button)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut state = use_modal();

    rsx! {
        button {
            onclick: move |_| state.close(),
            ..attributes,
            {children}
        }
    }
}

/// Ships children to `target` or the nearest ambient portal root, carrying
/// the modal state along so `Content`, `Overlay` and `Close` keep working on
/// the other side. Renders nothing when no root is available.
#[component]
pub fn Portal(target: Option<PortalRoot>, children: Element) -> Element {
    let root = match target.or_else(try_consume_context::<PortalRoot>) {
        Some(root) => root,
        None => return rsx! {},
    };

    let content = match try_consume_context::<ModalScope>() {
        Some(scope) => rsx! {
            ContextBridge { value: scope, {children} }
        },
        None => children,
    };

    rsx! {
        PortalMount { root, content }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::modal;
    use dioxus::dioxus_core::{ElementId, Mutation, Mutations, NoOpMutations};
    use dioxus_html::events::{PlatformEventData, SerializedMouseData};
    use std::cell::Cell;
    use std::rc::Rc;

    thread_local! {
        static CAPTURED: Cell<Option<OpenState>> = Cell::new(None);
        static FORWARDED: Cell<u32> = Cell::new(0);
    }

    fn click_listeners(mutations: Mutations) -> Vec<ElementId> {
        let mut ids = Vec::new();
        for edit in mutations.edits {
            if let Mutation::NewEventListener { name, id } = edit {
                if name == "click" {
                    ids.push(id);
                }
            }
        }
        ids
    }

    /// Dispatch a synthetic pointer click on `id`, bubbling, the way the
    /// liveview renderer feeds events into a headless dom.
    fn click(dom: &mut VirtualDom, id: ElementId) {
        dioxus_html::set_event_converter(Box::new(dioxus_html::SerializedHtmlEventConverter));
        let data = Rc::new(PlatformEventData::new(Box::new(
            SerializedMouseData::default(),
        )));
        dom.handle_event("click", data, id, true);
        dom.render_immediate(&mut NoOpMutations);
    }

    #[component]
    fn Probe() -> Element {
        let state = use_modal();
        CAPTURED.with(|slot| slot.set(Some(state)));
        rsx! {}
    }

    fn demo() -> Element {
        rsx! {
            modal::Root {
                modal::Trigger { "open modal" }
                modal::Overlay {}
                modal::Content {
                    p { "modal body" }
                    modal::Close { "dismiss" }
                }
                Probe {}
            }
        }
    }

    fn captured() -> OpenState {
        CAPTURED
            .with(|slot| slot.get())
            .expect("probe did not render")
    }

    #[test]
    fn closed_by_default_renders_trigger_only() {
        let mut dom = VirtualDom::new(demo);
        dom.rebuild_in_place();

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("open modal"));
        assert!(!html.contains("modal body"));
        assert!(!html.contains("dismiss"));
        assert!(!html.contains("bg-black/20"));
    }

    #[test]
    fn opening_reveals_content_overlay_and_close() {
        let mut dom = VirtualDom::new(demo);
        dom.rebuild_in_place();

        let mut state = captured();
        dom.in_runtime(|| state.open());
        dom.render_immediate(&mut NoOpMutations);

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("modal body"));
        assert!(html.contains("dismiss"));
        assert!(html.contains("bg-black/20"));

        // Opening again is idempotent.
        dom.in_runtime(|| state.open());
        dom.render_immediate(&mut NoOpMutations);
        assert!(dioxus_ssr::render(&dom).contains("modal body"));
    }

    #[test]
    fn closing_hides_content_again() {
        let mut dom = VirtualDom::new(demo);
        dom.rebuild_in_place();

        let mut state = captured();
        dom.in_runtime(|| state.open());
        dom.render_immediate(&mut NoOpMutations);
        assert!(dioxus_ssr::render(&dom).contains("modal body"));

        dom.in_runtime(|| state.close());
        dom.render_immediate(&mut NoOpMutations);
        let html = dioxus_ssr::render(&dom);
        assert!(!html.contains("modal body"));
        assert!(html.contains("open modal"));
    }

    #[test]
    fn content_wraps_region_in_click_catcher() {
        let mut dom = VirtualDom::new(demo);
        dom.rebuild_in_place();

        let mut state = captured();
        dom.in_runtime(|| state.open());
        dom.render_immediate(&mut NoOpMutations);

        // The full-viewport catcher is the parent of the content region.
        let html = dioxus_ssr::render(&dom);
        let catcher = html.find("fixed inset-0 z-40").unwrap();
        let region = html.find("modal body").unwrap();
        assert!(catcher < region);
    }

    fn clickable() -> Element {
        rsx! {
            modal::Root {
                modal::Trigger {
                    onclick: move |_: MouseEvent| FORWARDED.with(|count| count.set(count.get() + 1)),
                    "open modal"
                }
                modal::Content {
                    p { "modal body" }
                    modal::Close { "dismiss" }
                }
                Probe {}
            }
        }
    }

    #[test]
    fn trigger_click_opens_and_forwards_the_event() {
        FORWARDED.with(|count| count.set(0));
        let mut dom = VirtualDom::new(clickable);
        let triggers = click_listeners(dom.rebuild_to_vec());
        // While closed the trigger button is the only click target.
        assert_eq!(triggers.len(), 1);

        click(&mut dom, triggers[0]);
        assert!(dioxus_ssr::render(&dom).contains("modal body"));
        assert_eq!(FORWARDED.with(|count| count.get()), 1);

        // Clicking again keeps it open and keeps forwarding.
        click(&mut dom, triggers[0]);
        assert!(dioxus_ssr::render(&dom).contains("modal body"));
        assert_eq!(FORWARDED.with(|count| count.get()), 2);
    }

    #[test]
    fn click_outside_region_closes_inside_does_not() {
        let mut dom = VirtualDom::new(clickable);
        dom.rebuild_in_place();

        let mut state = captured();
        dom.in_runtime(|| state.open());
        let opened = click_listeners(dom.render_immediate_to_vec());
        // Catcher, content region, close button, in creation order.
        assert_eq!(opened.len(), 3);

        // Inside the region propagation stops before the catcher.
        click(&mut dom, opened[1]);
        assert!(dioxus_ssr::render(&dom).contains("modal body"));

        // On the catcher itself the click counts as outside.
        click(&mut dom, opened[0]);
        assert!(!dioxus_ssr::render(&dom).contains("modal body"));
    }

    #[test]
    fn close_button_click_closes() {
        let mut dom = VirtualDom::new(clickable);
        dom.rebuild_in_place();

        let mut state = captured();
        dom.in_runtime(|| state.open());
        let opened = click_listeners(dom.render_immediate_to_vec());
        assert_eq!(opened.len(), 3);

        click(&mut dom, opened[2]);
        assert!(!dioxus_ssr::render(&dom).contains("modal body"));
    }

    #[test]
    fn concurrent_contents_attach_independent_catchers() {
        fn app() -> Element {
            rsx! {
                modal::Root {
                    modal::Content { p { "first body" } }
                    modal::Content { p { "second body" } }
                    Probe {}
                }
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();

        let mut state = captured();
        dom.in_runtime(|| state.open());
        // One catcher and one region per instance.
        let opened = click_listeners(dom.render_immediate_to_vec());
        assert_eq!(opened.len(), 4);

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("first body"));
        assert!(html.contains("second body"));

        // Either catcher closes the shared state, so both instances leave.
        click(&mut dom, opened[0]);
        let html = dioxus_ssr::render(&dom);
        assert!(!html.contains("first body"));
        assert!(!html.contains("second body"));
    }

    #[test]
    #[should_panic(expected = "use_modal must be used within a modal::Root")]
    fn accessor_outside_root_is_a_contract_violation() {
        let mut dom = VirtualDom::new(|| rsx! { Probe {} });
        dom.rebuild_in_place();
    }
}
