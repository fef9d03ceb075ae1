use crate::config::BANNER_TIMEOUT_MS;
use crate::error::ClientError;
use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use querybook_core::DomainError;
use tracing::{error, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    id: u64,
    message: String,
}

/// Transient error banners shared through context.
#[derive(Clone, Copy)]
pub struct Notifier {
    banners: Signal<Vec<Banner>>,
    next_id: Signal<u64>,
}

impl Notifier {
    /// Shows `message` for a few seconds.
    pub fn show(&mut self, message: impl Into<String>) {
        let id = *self.next_id.peek();
        *self.next_id.write() += 1;
        self.banners.write().push(Banner {
            id,
            message: message.into(),
        });

        let mut banners = self.banners;
        spawn_forever(async move {
            TimeoutFuture::new(BANNER_TIMEOUT_MS).await;
            banners.write().retain(|banner| banner.id != id);
        });
    }

    pub fn report(&mut self, err: &ClientError) {
        error!(error = %err, "operation failed");
        self.show(err.user_message());
    }

    pub fn report_domain(&mut self, err: &DomainError) {
        warn!(error = %err, "operation failed");
        self.show(err.user_message());
    }

    fn dismiss(&mut self, id: u64) {
        self.banners.write().retain(|banner| banner.id != id);
    }
}

pub fn use_notifier_provider() -> Notifier {
    use_context_provider(|| Notifier {
        banners: Signal::new(Vec::new()),
        next_id: Signal::new(0),
    })
}

#[component]
pub fn BannerStack() -> Element {
    let mut notifier = use_context::<Notifier>();
    let banners = notifier.banners.read().clone();

    rsx! {
        div { class: "banner-stack",
            for banner in banners {
                div {
                    key: "{banner.id}",
                    class: "alert alert-danger shadow",
                    role: "alert",
                    onclick: move |_| notifier.dismiss(banner.id),
                    "{banner.message}"
                }
            }
        }
    }
}
