use dioxus::core::Task;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// Hands out tickets; only the most recent one is still live.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Generation {
    latest: u64,
}

impl Generation {
    pub fn next(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}

/// Runs only the latest scheduled action, once `delay_ms` has passed without
/// another call. Earlier pending actions are cancelled.
///
/// Pending tasks belong to the calling component and die with it.
#[derive(Clone, Copy)]
pub struct Debounce {
    delay_ms: u32,
    generation: Signal<Generation>,
    pending: Signal<Option<Task>>,
}

impl Debounce {
    pub fn call(&mut self, action: impl FnOnce() + 'static) {
        if let Some(task) = self.pending.take() {
            task.cancel();
        }
        let ticket = self.generation.write().next();
        let generation = self.generation;
        let delay_ms = self.delay_ms;
        let task = spawn(async move {
            TimeoutFuture::new(delay_ms).await;
            // stale tickets never run
            if generation.peek().is_latest(ticket) {
                action();
            }
        });
        self.pending.set(Some(task));
    }
}

pub fn use_debounce(delay_ms: u32) -> Debounce {
    let generation = use_signal(Generation::default);
    let pending = use_signal(|| None);
    Debounce {
        delay_ms,
        generation,
        pending,
    }
}
