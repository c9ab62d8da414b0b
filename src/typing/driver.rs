//! Runs a [`TypingAnimator`] on a tokio task.
//!
//! The display text is published on a `watch` channel after every tick, and
//! the animator is optionally handed to an observer callback. One `sleep` is
//! pending at a time.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::{sync::watch, task::JoinHandle};

use super::{CancelFlag, TypingAnimator};

pub struct TypingHandle {
    text: watch::Receiver<String>,
    cancel: CancelFlag,
    // held for the whole of a tick, including the observer call
    ticking: Arc<Mutex<()>>,
    task: Option<JoinHandle<()>>,
}

impl TypingHandle {
    /// Current display text.
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.text.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.cancel.is_cancelled()
    }

    /// Stops the loop. Calling it again is a no-op.
    ///
    /// If a tick is in progress on another worker, this blocks until it
    /// finishes, so the observer is never called once `stop` has returned.
    /// Must not be called from inside the observer.
    pub fn stop(&mut self) {
        let cancelled = {
            let _tick = self.ticking.lock().unwrap_or_else(PoisonError::into_inner);
            self.cancel.cancel()
        };
        if cancelled {
            log::debug!("typing animation stopped");
        }
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for TypingHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Starts the animation loop. Must be called from within a tokio runtime.
pub fn spawn(animator: TypingAnimator) -> TypingHandle {
    spawn_with_observer(animator, |_| {})
}

pub fn spawn_with_observer<F>(mut animator: TypingAnimator, mut observer: F) -> TypingHandle
where
    F: FnMut(&TypingAnimator) + Send + 'static,
{
    let (tx, rx) = watch::channel(animator.display_text().to_string());
    let cancel = CancelFlag::new();
    let ticking = Arc::new(Mutex::new(()));
    let task_cancel = cancel.clone();
    let task_ticking = ticking.clone();

    log::debug!(
        "typing animation started with {} phrases",
        animator.config().phrases.len()
    );

    let task = tokio::spawn(async move {
        let mut delay = animator.initial_delay();
        loop {
            tokio::time::sleep(delay).await;
            let next = {
                let _tick = task_ticking
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                if task_cancel.is_cancelled() {
                    None
                } else {
                    let tick = animator.tick();
                    observer(&animator);
                    tx.send_replace(animator.display_text().to_string());
                    Some(tick.delay)
                }
            };
            let Some(next) = next else {
                break;
            };
            delay = next;
        }
    });

    TypingHandle {
        text: rx,
        cancel,
        ticking,
        task: Some(task),
    }
}
