use dioxus::prelude::*;
use querybook_core::{Post, SortKey};

#[component]
pub fn Filters(
    search: String,
    categories: Vec<String>,
    category: String,
    sort: SortKey,
    on_search: EventHandler<String>,
    on_category: EventHandler<String>,
    on_sort: EventHandler<SortKey>,
) -> Element {
    rsx! {
        div { class: "row g-3 mb-4 filters",
            div { class: "col-md-6",
                input {
                    id: "searchInput",
                    class: "form-control",
                    r#type: "search",
                    placeholder: "Search posts, formulas, tags...",
                    value: "{search}",
                    oninput: move |evt| on_search.call(evt.value()),
                }
            }
            div { class: "col-md-3",
                select {
                    id: "categoryFilter",
                    class: "form-select",
                    value: "{category}",
                    onchange: move |evt| on_category.call(evt.value()),
                    option { value: "", "All Categories" }
                    for name in categories {
                        option { key: "{name}", value: "{name}", selected: name == category, "{name}" }
                    }
                }
            }
            div { class: "col-md-3",
                select {
                    id: "sortFilter",
                    class: "form-select",
                    value: "{sort}",
                    onchange: move |evt| on_sort.call(evt.value().parse().unwrap_or_default()),
                    for key in SortKey::ALL {
                        option { key: "{key}", value: "{key}", selected: key == sort, "{key.label()}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn PostCard(post: Post, on_read: EventHandler<String>) -> Element {
    let id = post.id.clone();

    rsx! {
        div { class: "col-md-6 col-lg-4",
            div { class: "card card-excel h-100",
                if let Some(src) = post.thumbnail.as_ref() {
                    img { class: "card-img-top", src: "{src}", alt: "{post.title}" }
                }
                div { class: "card-excel-header d-flex justify-content-between align-items-center",
                    span { class: "badge bg-excel", "{post.badge()}" }
                    small { class: "text-muted", "{post.display_date()}" }
                }
                div { class: "card-excel-body",
                    h5 { class: "card-title", "{post.title}" }
                    p { class: "card-text", "{post.excerpt}" }
                    div { class: "mt-2",
                        for tag in post.tags.iter() {
                            span { class: "badge bg-light text-dark me-1", "{tag}" }
                        }
                    }
                }
                div { class: "card-footer bg-transparent border-top-0",
                    button {
                        class: "btn btn-excel btn-sm",
                        "data-id": "{post.id}",
                        onclick: move |_| on_read.call(id.clone()),
                        "Read More"
                    }
                }
            }
        }
    }
}

/// Grid of cards, or a single placeholder row when there is nothing to show.
#[component]
pub fn PostGrid(posts: Vec<Post>, empty_message: String, on_read: EventHandler<String>) -> Element {
    rsx! {
        div { id: "postsRow", class: "row g-4",
            if posts.is_empty() {
                div { class: "col-12 text-center py-5",
                    div { class: "text-muted", "{empty_message}" }
                }
            } else {
                for post in posts {
                    PostCard { key: "{post.id}", post: post.clone(), on_read }
                }
            }
        }
    }
}
