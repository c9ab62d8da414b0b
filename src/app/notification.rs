use std::time::Duration;

use leptos::prelude::*;

const AUTO_DISMISS: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    fn class(self) -> &'static str {
        match self {
            NotificationKind::Success => "bg-green-600",
            NotificationKind::Error => "bg-red-600",
            NotificationKind::Info => "bg-teal-600",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            NotificationKind::Success => "✔",
            NotificationKind::Error => "✕",
            NotificationKind::Info => "ℹ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Notification {
    id: u64,
    message: String,
    kind: NotificationKind,
}

/// Toast queue shared through context.
#[derive(Debug, Clone, Copy)]
pub struct Notifications {
    list: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
}

impl Notifications {
    /// Shows a toast that dismisses itself after a few seconds. Returns its id.
    pub fn show(&self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        let id = self.push(message.into(), kind);
        let this = *self;
        set_timeout(move || this.dismiss(id), AUTO_DISMISS);
        id
    }

    fn push(&self, message: String, kind: NotificationKind) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.list.update(|l| l.push(Notification { id, message, kind }));
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.list.update(|l| l.retain(|n| n.id != id));
    }
}

pub fn provide_notifications() -> Notifications {
    let notifications = Notifications {
        list: RwSignal::new(Vec::new()),
        next_id: StoredValue::new(0),
    };
    provide_context(notifications);
    notifications
}

#[component]
pub fn Toasts() -> impl IntoView {
    let notifications = expect_context::<Notifications>();
    view! {
        <div class="fixed top-20 right-4 z-50 flex flex-col gap-3 max-w-sm" aria-live="polite">
            <For
                each=move || notifications.list.get()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=format!(
                            "{} text-white px-4 py-3 rounded-lg shadow-lg flex items-start gap-3",
                            n.kind.class(),
                        )>
                            <span>{n.kind.icon()}</span>
                            <p class="flex-1 text-sm">{n.message}</p>
                            <button
                                class="opacity-70 hover:opacity-100"
                                aria-label="Dismiss notification"
                                on:click=move |_| notifications.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
