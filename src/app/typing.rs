use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use leptos::prelude::*;

use crate::typing::{CancelFlag, TypingAnimator, TypingConfig};

/// One browser timer chain driving an animator.
#[derive(Clone)]
struct Ticker {
    animator: Arc<Mutex<TypingAnimator>>,
    set_text: WriteSignal<String>,
    cancel: CancelFlag,
    pending: Arc<Mutex<Option<TimeoutHandle>>>,
}

impl Ticker {
    fn schedule(self, delay: Duration) {
        let pending = self.pending.clone();
        match set_timeout_with_handle(move || self.fire(), delay) {
            Ok(handle) => {
                *pending.lock().expect("should be able to acquire lock") = Some(handle);
            }
            Err(e) => log::error!("couldn't schedule typing tick: {e:?}"),
        }
    }

    fn fire(self) {
        // the component may be gone by the time a timer fires
        if self.cancel.is_cancelled() {
            return;
        }
        let (text, delay) = {
            let mut animator = self
                .animator
                .lock()
                .expect("should be able to acquire lock");
            let tick = animator.tick();
            (animator.display_text().to_string(), tick.delay)
        };
        self.set_text.set(text);
        self.schedule(delay);
    }

    fn stop(&self) {
        if !self.cancel.cancel() {
            return;
        }
        if let Some(handle) = self
            .pending
            .lock()
            .expect("should be able to acquire lock")
            .take()
        {
            handle.clear();
        }
        log::debug!("typing animation stopped");
    }
}

/// Animated typing text for the lifetime of the calling component.
///
/// The loop starts once mounted in the browser and is cancelled on cleanup.
/// An empty phrase list yields a signal that stays empty.
pub fn use_typing_text(config: TypingConfig) -> ReadSignal<String> {
    let (text, set_text) = signal(String::new());
    let animator = match TypingAnimator::new(config) {
        Ok(animator) => animator,
        Err(e) => {
            log::warn!("typing animation disabled: {e}");
            return text;
        }
    };
    let delay = animator.initial_delay();
    let ticker = Ticker {
        animator: Arc::new(Mutex::new(animator)),
        set_text,
        cancel: CancelFlag::new(),
        pending: Arc::new(Mutex::new(None)),
    };

    Effect::new({
        let ticker = ticker.clone();
        move |_| ticker.clone().schedule(delay)
    });
    on_cleanup(move || ticker.stop());

    text
}

#[component]
pub fn TypingText(config: TypingConfig, #[prop(optional, into)] class: String) -> impl IntoView {
    let label = config.phrases.join(", ");
    let text = use_typing_text(config);
    view! {
        <span class="sr-only">{label}</span>
        <span class=class aria-hidden="true">
            {move || text.get()}
        </span>
        <span class="typing-caret" aria-hidden="true">
            "|"
        </span>
    }
}
