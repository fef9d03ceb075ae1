use crate::client::{StaticPostSource, load_store};
use crate::components::banner::{BannerStack, use_notifier_provider};
use crate::components::catalog::Catalog;
use crate::components::loading::LoadingOverlay;
use crate::components::theme_panel::{ThemePanel, apply_palette};
use chrono::{Datelike, Local};
use dioxus::prelude::*;
use tracing::{Level, warn};

mod browser;
mod client;
mod components;
mod config;
mod debounce;
mod error;
mod storage;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

fn main() {
    let _ = dioxus::logger::init(Level::INFO);
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut notifier = use_notifier_provider();

    let restored = use_hook(storage::load_theme);
    let theme = use_signal({
        let restored = restored.clone();
        move || restored.unwrap_or_default()
    });

    use_effect(move || {
        if let Err(err) = &restored {
            notifier.report_domain(err);
        }
    });

    use_effect(move || match theme().palette() {
        Ok(palette) => apply_palette(&palette),
        Err(err) => warn!(error = %err, "theme could not be applied"),
    });

    let posts = use_resource(|| async move {
        load_store(&StaticPostSource::new(config::posts_url())).await
    });

    use_effect(move || {
        if let Some((_, Some(err))) = &*posts.read() {
            notifier.report(err);
        }
    });

    let year = Local::now().year();

    rsx! {
        document::Link { rel: "stylesheet", href: BOOTSTRAP_CSS }
        document::Link { rel: "stylesheet", href: FONT_AWESOME_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        nav { class: "navbar navbar-dark bg-excel shadow-sm",
            div { class: "container",
                span { class: "navbar-brand fw-bold",
                    i { class: "fas fa-table me-2" }
                    "Excel Query Book"
                }
            }
        }

        header { class: "hero py-5 mb-4",
            div { class: "container text-center",
                h1 { class: "display-6 fw-bold text-excel", "Formulas, tips and tutorials" }
                p { class: "lead text-muted mb-0", "Search the notebook or pick a category to get started." }
            }
        }

        main { class: "container pb-5",
            match posts.read().as_ref() {
                Some((store, error)) => rsx! {
                    Catalog { store: store.clone(), load_failed: error.is_some() }
                },
                None => rsx! {
                    LoadingOverlay { message: "Loading posts and content..." }
                },
            }
        }

        footer { class: "footer border-top py-4 text-center text-muted",
            "© "
            span { id: "year", "{year}" }
            " Excel Query Book"
        }

        ThemePanel { preference: theme }
        BannerStack {}
    }
}
