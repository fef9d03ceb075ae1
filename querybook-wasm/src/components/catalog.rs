use crate::browser;
use crate::components::banner::Notifier;
use crate::components::post_list::{Filters, PostGrid};
use crate::components::post_modal::PostModal;
use crate::config::{NAVIGATE_DELAY_MS, SEARCH_DEBOUNCE_MS};
use crate::debounce::use_debounce;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use querybook_core::share::post_id_from_url;
use querybook_core::{DetailState, Direction, PostQuery, PostStore, SortKey};
use tracing::{debug, warn};

const NO_RESULTS: &str = "No posts found matching your criteria.";
const LOAD_FAILED: &str = "Could not load posts.";

/// List view plus the detail overlay, over one loaded store.
#[component]
pub fn Catalog(store: PostStore, load_failed: bool) -> Element {
    let store = use_context_provider(|| store);
    let mut notifier = use_context::<Notifier>();

    let mut search_text = use_signal(String::new);
    let mut search = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut sort = use_signal(SortKey::default);
    let mut detail = use_signal(DetailState::default);
    let mut debounce = use_debounce(SEARCH_DEBOUNCE_MS);

    let visible = use_memo({
        let store = store.clone();
        move || store.filter_and_sort(&PostQuery::new(search(), category(), sort()))
    });

    let view_post = use_callback({
        let store = store.clone();
        move |id: String| match store.get(&id) {
            Ok(post) => {
                debug!(%post, "opening post");
                detail.write().open(post.id.clone());
            }
            Err(err) => notifier.report_domain(&err),
        }
    });

    let close = use_callback(move |_: ()| {
        detail.write().close();
    });

    let navigate = use_callback({
        let store = store.clone();
        move |direction: Direction| {
            let Some(target) = detail.write().navigate(&store, direction) else {
                return;
            };
            spawn(async move {
                TimeoutFuture::new(NAVIGATE_DELAY_MS).await;
                detail.write().open(target);
            });
        }
    });

    use_effect(move || {
        let open = detail.read().is_open();
        if let Err(err) = browser::lock_body_scroll(open) {
            warn!(error = %err, "could not toggle page scroll");
        }
    });

    // `?post=<id>` links produced by "copy link".
    use_effect(move || match browser::current_href() {
        Ok(href) => {
            if let Some(id) = post_id_from_url(&href) {
                view_post.call(id);
            }
        }
        Err(err) => warn!(error = %err, "could not read page location"),
    });

    let categories: Vec<String> = store.categories().into_iter().map(str::to_string).collect();
    let open_post = detail
        .read()
        .current()
        .and_then(|id| store.find(id))
        .cloned();
    let empty_message = if load_failed { LOAD_FAILED } else { NO_RESULTS };

    rsx! {
        Filters {
            search: search_text(),
            categories,
            category: category(),
            sort: sort(),
            on_search: move |value: String| {
                search_text.set(value.clone());
                debounce.call(move || search.set(value));
            },
            on_category: move |value: String| category.set(value),
            on_sort: move |value: SortKey| sort.set(value),
        }
        PostGrid { posts: visible(), empty_message: empty_message.to_string(), on_read: view_post }
        if let Some(post) = open_post {
            PostModal {
                key: "{post.id}",
                post: post.clone(),
                on_close: close,
                on_navigate: navigate,
                on_view: view_post,
            }
        }
    }
}
