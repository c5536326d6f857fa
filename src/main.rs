use dioxus::prelude::*;

use dioxus_overlays::components::{drawer, modal, PortalProvider};
use dioxus_overlays::utils::{DemoSettings, Theme};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(any(feature = "desktop", feature = "web", feature = "mobile"))]
    dioxus::launch(App);

    #[cfg(not(any(feature = "desktop", feature = "web", feature = "mobile")))]
    {
        let _ = App;
        eprintln!("No renderer enabled. Run the demo with `cargo run --features desktop`.");
    }
}

#[component]
fn App() -> Element {
    // Load settings from disk on startup
    let mut app_settings = use_signal(|| {
        DemoSettings::load().unwrap_or_else(|e| {
            eprintln!("Failed to load settings: {}", e);
            DemoSettings::default()
        })
    });

    // Theme state - load from settings
    let mut theme = use_signal(|| {
        let settings = app_settings.read();
        Theme::from_str(&settings.theme).unwrap_or(Theme::Light)
    });

    // Handler for toggling dark/light mode
    let toggle_mode = move |_| {
        let new_theme = theme.read().toggled();
        theme.set(new_theme);

        // Save theme to settings
        let mut settings = app_settings.write();
        settings.theme = new_theme.data_theme().to_string();
        if let Err(e) = settings.save() {
            eprintln!("Failed to save settings: {}", e);
        }
    };

    let theme_val = *theme.read();
    let reduce_motion = app_settings.read().reduce_motion;
    let panel_class = if reduce_motion { "panel" } else { "panel slide-in" };

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            "data-theme": "{theme_val.data_theme()}",

            PortalProvider {
                div {
                    class: "demo-page",

                    // Top bar with theme toggle
                    div {
                        class: "demo-topbar",
                        span { "dioxus-overlays demo" }
                        button {
                            class: "demo-button",
                            onclick: toggle_mode,
                            title: if theme_val.is_dark() { "Switch to light mode" } else { "Switch to dark mode" },
                            "{theme_val.toggled().name()} mode"
                        }
                    }

                    // Drawer demo
                    div {
                        class: "demo-card",

                        drawer::Root {
                            drawer::Trigger {
                                class: "demo-button",
                                "Open Drawer"
                            }
                            drawer::Portal {
                                drawer::Content {
                                    div {
                                        class: "{panel_class}",

                                        drawer::Close {
                                            class: "close-pill",
                                            "✕"
                                        }

                                        div {
                                            class: "panel-section",
                                            h1 { "Drawer" }
                                        }
                                        div { class: "panel-divider" }
                                        div {
                                            class: "panel-section",
                                            p { "This is a Drawer component built with the compound pattern." }
                                        }
                                    }
                                }
                                drawer::Overlay {}
                            }
                        }
                    }

                    // Modal demo
                    div {
                        class: "demo-card",

                        modal::Root {
                            modal::Trigger {
                                class: "demo-button",
                                "Open Modal"
                            }
                            modal::Portal {
                                modal::Overlay {}
                                modal::Content {
                                    div {
                                        class: "modal-card",

                                        div {
                                            class: "panel-section",
                                            h1 { "Modal" }
                                            p { "Click outside this card or use the button below to dismiss it." }
                                        }
                                        div { class: "panel-divider" }
                                        div {
                                            class: "panel-section",
                                            modal::Close {
                                                class: "demo-button",
                                                "Close"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
