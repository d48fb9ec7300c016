//! Toast notifications

use beart_contact::{Notification, Notifier};
use leptos::*;
use std::time::Duration;

/// How long a toast stays up unless dismissed
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq)]
struct Toast {
    id: u64,
    notification: Notification,
}

/// Page-wide toast queue, shared through context
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for Toaster {
    fn notify(&self, notification: Notification) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|toasts| toasts.push(Toast { id, notification }));

        let toaster = *self;
        set_timeout(move || toaster.dismiss(id), TOAST_DURATION);
    }
}

pub fn provide_toaster() -> Toaster {
    let toaster = Toaster::new();
    provide_context(toaster);
    toaster
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

#[component]
pub fn ToastViewport() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="fixed bottom-0 right-0 z-50 flex flex-col gap-2 p-4 w-full max-w-sm" role="status" aria-live="polite">
            <For
                each=move || toaster.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let style = if toast.notification.is_destructive() {
                        "border-red-600 bg-red-600 text-white"
                    } else {
                        "border-gray-200 bg-white text-gray-900"
                    };
                    view! {
                        <div class=format!("relative rounded-md border p-4 pr-8 shadow-lg {}", style)>
                            <p class="text-sm font-semibold">{toast.notification.title}</p>
                            <p class="text-sm opacity-90">{toast.notification.description}</p>
                            <button
                                class="absolute right-2 top-2 opacity-70 hover:opacity-100"
                                aria-label="Dismiss"
                                on:click=move |_| toaster.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
