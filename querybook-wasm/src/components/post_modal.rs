use crate::browser;
use crate::components::banner::Notifier;
use crate::config::{COPY_CONFIRM_MS, RELATED_TEASER_CHARS};
use crate::error::ClientError;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use querybook_core::markup::{highlight_formulas, print_document};
use querybook_core::share::{SharePlatform, post_link, share_url};
use querybook_core::{Direction, DomainError, KeyCommand, Post, PostStore, RELATED_LIMIT};
use tracing::{error, warn};

const MODAL_ID: &str = "postModal";
const MODAL_BODY_SELECTOR: &str = ".post-modal .modal-body";

async fn copy_post_link(id: &str) -> Result<(), ClientError> {
    let href = browser::current_href()?;
    let link = post_link(&href, id)?;
    browser::copy_text(&link).await
}

fn share(platform: SharePlatform, post: &Post) -> Result<(), ClientError> {
    let href = browser::current_href()?;
    browser::open_popup(&share_url(platform, post, &href))
}

#[component]
fn RelatedCard(post: Post, on_view: EventHandler<String>) -> Element {
    let id = post.id.clone();

    rsx! {
        div { class: "col-md-4",
            div { class: "card card-excel h-100",
                div { class: "card-excel-body",
                    h6 { class: "card-title", "{post.title}" }
                    p { class: "card-text small text-muted", "{post.teaser(RELATED_TEASER_CHARS)}" }
                    button {
                        class: "btn btn-excel btn-sm",
                        onclick: move |_| on_view.call(id.clone()),
                        "Read More"
                    }
                }
            }
        }
    }
}

/// Full-screen overlay for one post. Keyboard handling lives on the overlay
/// itself, so it is registered on open and gone once the overlay unmounts.
#[component]
pub fn PostModal(
    post: Post,
    on_close: EventHandler<()>,
    on_navigate: EventHandler<Direction>,
    on_view: EventHandler<String>,
) -> Element {
    let store = use_context::<PostStore>();
    let mut notifier = use_context::<Notifier>();
    let mut copied = use_signal(|| false);
    let mut fullscreen = use_signal(|| false);

    let related: Vec<Post> = store
        .related(&post, RELATED_LIMIT)
        .into_iter()
        .cloned()
        .collect();
    let previous = store
        .adjacent(&post.id, Direction::Previous)
        .map(|p| (p.id.clone(), p.title.clone()));
    let next = store
        .adjacent(&post.id, Direction::Next)
        .map(|p| (p.id.clone(), p.title.clone()));
    let content = highlight_formulas(&post.content);
    let printable = print_document(&post.title, &content);

    let on_share = use_callback({
        let post = post.clone();
        move |platform: SharePlatform| {
            if let Err(err) = share(platform, &post) {
                notifier.report(&err);
            }
        }
    });

    let copy_id = post.id.clone();
    let on_copy = move |_| {
        let id = copy_id.clone();
        spawn(async move {
            match copy_post_link(&id).await {
                Ok(()) => {
                    copied.set(true);
                    TimeoutFuture::new(COPY_CONFIRM_MS).await;
                    copied.set(false);
                }
                Err(err) => {
                    error!(error = %err, "failed to copy link");
                    notifier.show("Failed to copy link to clipboard");
                }
            }
        });
    };

    let on_print = move |_| {
        if let Err(err) = browser::print_html(&printable) {
            notifier.report(&err);
        }
    };

    let on_fullscreen = move |_| match browser::toggle_fullscreen(MODAL_ID) {
        Ok(on) => fullscreen.set(on),
        Err(err) => warn!(error = %err, "fullscreen failed"),
    };

    let on_keydown = move |evt: KeyboardEvent| match KeyCommand::from_key_name(&evt.key().to_string()) {
        Some(KeyCommand::Close) => on_close.call(()),
        Some(KeyCommand::Navigate(direction)) => on_navigate.call(direction),
        None => {}
    };

    let copy_class = if copied() {
        "btn btn-sm btn-success"
    } else {
        "btn btn-sm btn-outline-excel"
    };
    let fullscreen_icon = if fullscreen() { "fas fa-compress" } else { "fas fa-expand" };

    rsx! {
        div {
            id: MODAL_ID,
            class: "post-modal modal fade show",
            tabindex: "-1",
            role: "dialog",
            "aria-labelledby": "postModalLabel",
            "data-current-post": "{post.id}",
            style: "display: block;",
            onmounted: move |evt: MountedEvent| async move {
                let _ = evt.set_focus(true).await;
            },
            onkeydown: on_keydown,
            div { class: "modal-dialog modal-fullscreen",
                div { class: "modal-content bg-light",
                    div { class: "modal-header bg-excel text-white border-0",
                        div { class: "d-flex justify-content-between align-items-center w-100",
                            div {
                                h5 { id: "postModalLabel", class: "modal-title mb-0",
                                    i { class: "fas fa-file-excel me-2" }
                                    "{post.title}"
                                }
                                div { class: "mt-1",
                                    span { class: "badge bg-light text-dark me-2", "{post.badge()}" }
                                    small { class: "text-light", "{post.display_date()}" }
                                }
                            }
                            div { class: "d-flex align-items-center",
                                button { class: "btn btn-sm btn-light me-2", title: "Print", onclick: on_print,
                                    i { class: "fas fa-print" }
                                }
                                button { class: "btn btn-sm btn-light me-2", title: "Toggle Fullscreen", onclick: on_fullscreen,
                                    i { class: "{fullscreen_icon}" }
                                }
                                button { class: "btn btn-sm btn-light", title: "Close", onclick: move |_| on_close.call(()),
                                    i { class: "fas fa-times" }
                                }
                            }
                        }
                    }
                    div { class: "modal-body p-0",
                        div { class: "container-fluid py-4",
                            div { class: "row",
                                div { class: "col-lg-8",
                                    if let Some(src) = post.thumbnail.as_ref() {
                                        img { class: "img-fluid mb-3", src: "{src}", alt: "{post.title}" }
                                    }
                                    div { class: "post-content bg-white rounded shadow-sm p-4", dangerous_inner_html: "{content}" }
                                    div { class: "mt-4",
                                        h6 { class: "text-excel mb-3",
                                            i { class: "fas fa-link me-2" }
                                            "Related Posts"
                                        }
                                        div { id: "relatedPosts", class: "row g-3",
                                            if related.is_empty() {
                                                div { class: "col-12 text-muted text-center", "No related posts found." }
                                            }
                                            for related_post in related {
                                                RelatedCard { key: "{related_post.id}", post: related_post.clone(), on_view }
                                            }
                                        }
                                    }
                                }
                                div { class: "col-lg-4",
                                    div { class: "card card-excel mb-4",
                                        div { class: "card-excel-header",
                                            i { class: "fas fa-info-circle me-2" }
                                            "Post Information"
                                        }
                                        div { class: "card-excel-body",
                                            div { class: "mb-3",
                                                strong { "Category:" }
                                                span { class: "badge bg-excel ms-2", "{post.badge()}" }
                                            }
                                            div { class: "mb-3",
                                                strong { "Published:" }
                                                div { class: "text-muted", "{post.display_date()}" }
                                            }
                                            div { class: "mb-3",
                                                strong { "Reading Time:" }
                                                div { class: "text-muted", "{post.reading_time()} min read" }
                                            }
                                            if !post.tags.is_empty() {
                                                div { class: "mb-3",
                                                    strong { "Tags:" }
                                                    div { class: "mt-1",
                                                        for tag in post.tags.iter() {
                                                            span { class: "badge bg-light text-dark me-1", "{tag}" }
                                                        }
                                                    }
                                                }
                                            }
                                            div {
                                                strong { "Share:" }
                                                div { class: "mt-2",
                                                    button {
                                                        class: "btn btn-sm btn-outline-excel me-1",
                                                        title: "Share on Twitter",
                                                        onclick: move |_| on_share.call(SharePlatform::Twitter),
                                                        i { class: "fab fa-twitter" }
                                                    }
                                                    button {
                                                        class: "btn btn-sm btn-outline-excel me-1",
                                                        title: "Share on LinkedIn",
                                                        onclick: move |_| on_share.call(SharePlatform::LinkedIn),
                                                        i { class: "fab fa-linkedin" }
                                                    }
                                                    button { class: "{copy_class}", title: "Copy link", onclick: on_copy,
                                                        if copied() {
                                                            i { class: "fas fa-check me-1" }
                                                            "Copied!"
                                                        } else {
                                                            i { class: "fas fa-link" }
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                    div { class: "card card-excel",
                                        div { class: "card-excel-header",
                                            i { class: "fas fa-bolt me-2" }
                                            "Quick Actions"
                                        }
                                        div { class: "card-excel-body",
                                            div { class: "d-grid gap-2",
                                                button {
                                                    class: "btn btn-excel btn-sm",
                                                    onclick: move |_| notifier.report_domain(&DomainError::Unavailable("PDF download")),
                                                    i { class: "fas fa-download me-2" }
                                                    "Download as PDF"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    div { class: "modal-footer bg-light border-top",
                        div { class: "d-flex justify-content-between w-100",
                            div { class: "btn-group",
                                if let Some((id, title)) = previous {
                                    button {
                                        class: "btn btn-outline-excel btn-sm",
                                        title: "{title}",
                                        onclick: move |_| on_view.call(id.clone()),
                                        i { class: "fas fa-chevron-left me-1" }
                                        "Previous"
                                    }
                                } else {
                                    button { class: "btn btn-outline-excel btn-sm", disabled: true,
                                        i { class: "fas fa-chevron-left me-1" }
                                        "Previous"
                                    }
                                }
                                if let Some((id, title)) = next {
                                    button {
                                        class: "btn btn-outline-excel btn-sm",
                                        title: "{title}",
                                        onclick: move |_| on_view.call(id.clone()),
                                        "Next"
                                        i { class: "fas fa-chevron-right ms-1" }
                                    }
                                } else {
                                    button { class: "btn btn-outline-excel btn-sm", disabled: true,
                                        "Next"
                                        i { class: "fas fa-chevron-right ms-1" }
                                    }
                                }
                            }
                            div {
                                button { class: "btn btn-secondary me-2", onclick: move |_| on_close.call(()),
                                    i { class: "fas fa-arrow-left me-2" }
                                    "Back to Posts"
                                }
                                button {
                                    class: "btn btn-excel",
                                    onclick: move |_| {
                                        if let Err(err) = browser::scroll_to_top(MODAL_BODY_SELECTOR) {
                                            warn!(error = %err, "scroll to top failed");
                                        }
                                    },
                                    i { class: "fas fa-arrow-up me-2" }
                                    "Top"
                                }
                            }
                        }
                    }
                }
            }
        }
        div { class: "modal-backdrop fade show" }
    }
}
