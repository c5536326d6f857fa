use dioxus::prelude::*;

/// Handle to an alternate render root that portals can ship children into.
///
/// One is created by [`PortalProvider`] (the "document body" of a subtree) or
/// explicitly with [`use_portal_root`] for a caller-placed [`PortalOutlet`].
#[derive(Clone, Copy, PartialEq)]
pub struct PortalRoot {
    entries: Signal<Vec<PortalEntry>>,
    next_id: Signal<usize>,
}

#[derive(Clone)]
struct PortalEntry {
    id: usize,
    content: Element,
}

impl PortalRoot {
    fn new() -> Self {
        Self {
            entries: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    fn mount(&mut self) -> usize {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        id
    }

    fn place(&mut self, id: usize, content: Element) {
        // Skip the write when the slot already holds this content, so
        // outlets are not re-rendered for no-op refreshes.
        {
            let entries = self.entries.peek();
            if entries
                .iter()
                .any(|entry| entry.id == id && entry.content == content)
            {
                return;
            }
        }

        let mut entries = self.entries.write();
        match entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => entry.content = content,
            None => entries.push(PortalEntry { id, content }),
        }
    }

    fn unmount(&mut self, id: usize) {
        self.entries.write().retain(|entry| entry.id != id);
    }

    fn snapshot(&self) -> Vec<PortalEntry> {
        self.entries.read().clone()
    }
}

/// Create a portal root owned by the calling scope. Render it somewhere with
/// `PortalOutlet { root }` and address it with `Portal { target: root }`.
pub fn use_portal_root() -> PortalRoot {
    use_hook(PortalRoot::new)
}

/// Provides an ambient portal root to all descendants and renders the
/// matching outlet after them, so portaled children land at the end of this
/// subtree the way `document.body` portals do.
#[component]
pub fn PortalProvider(children: Element) -> Element {
    let root = use_context_provider(PortalRoot::new);

    rsx! {
        {children}
        PortalOutlet { root }
    }
}

/// Renders whatever is currently mounted into `root`, in mount order.
#[component]
pub fn PortalOutlet(root: PortalRoot) -> Element {
    rsx! {
        for entry in root.snapshot() {
            {entry.content}
        }
    }
}

/// Renders `children` into `target`, or into the nearest ambient
/// [`PortalProvider`] root when no target is given. With neither available it
/// renders nothing.
#[component]
pub fn Portal(target: Option<PortalRoot>, children: Element) -> Element {
    let root = match target.or_else(try_consume_context::<PortalRoot>) {
        Some(root) => root,
        None => return rsx! {},
    };

    rsx! {
        PortalMount { root, content: children }
    }
}

/// The scope that actually occupies a slot in the outlet: registers on mount,
/// refreshes its content every render, and vacates the slot on unmount.
#[component]
pub(crate) fn PortalMount(root: PortalRoot, content: Element) -> Element {
    let id = use_hook(|| {
        let mut root = root;
        root.mount()
    });
    use_drop(move || {
        let mut root = root;
        root.unmount(id);
    });

    {
        let mut root = root;
        root.place(id, content);
    }

    rsx! {}
}

/// Re-provides a family's state context on the outlet side of a portal, so
/// components inside the relocated subtree still find their `Root`.
#[component]
pub(crate) fn ContextBridge<T: Clone + PartialEq + 'static>(value: T, children: Element) -> Element {
    use_context_provider(move || value.clone());
    rsx! {
        {children}
    }
}
