//! Contact page

use beart_contact::{ContactHandler, Field, FormController, Notifier, SubmitAttempt, DIRECT_LINKS};
use leptos::*;
use leptos_router::*;

use crate::components::*;
use crate::server::ServerFnHandler;

/// Submit button text for the current busy state
pub fn submit_label(busy: bool) -> &'static str {
    if busy {
        "Sending..."
    } else {
        "Send Message"
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    // Effects only run in the browser, so the server renders the placeholder
    let (mounted, set_mounted) = create_signal(false);
    create_effect(move |_| set_mounted.set(true));

    view! {
        <div class="container mx-auto flex-grow py-8 sm:py-12 md:py-16 lg:py-20 px-4 md:px-6">
            <Show when=move || mounted.get() fallback=|| ()>
                <Card
                    title="Contact Us"
                    description="We're here to help. Reach out through any of the methods below or fill out the form."
                >
                    <div class="flex flex-col gap-8 md:gap-10 mb-8">
                        <div class="w-full text-left">
                            <h3 class="text-lg sm:text-xl font-semibold mb-4">"Send Us a Message"</h3>
                            <ContactForm/>
                        </div>

                        <Separator/>

                        <div class="w-full text-left">
                            <h3 class="text-lg sm:text-xl font-semibold mb-4">"Get in Touch Directly"</h3>
                            <div class="space-y-3 sm:space-y-4">
                                {DIRECT_LINKS.iter().map(|link| view! {
                                    <DirectLinkButton link=link/>
                                }).collect_view()}
                            </div>
                        </div>
                    </div>
                </Card>
            </Show>
        </div>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let toaster = use_toaster();
    let form = create_rw_signal(FormController::new());

    let query = use_query_map();
    if let Some(service) = query.with_untracked(|q| q.get("service").cloned()) {
        form.update(|f| {
            f.prefill_subject(&service);
        });
    }

    let is_submitting = move || form.with(FormController::is_submitting);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let Some(SubmitAttempt::Dispatched(payload)) = form.try_update(FormController::begin_submit)
        else {
            return;
        };

        spawn_local(async move {
            let response = ServerFnHandler.submit(payload).await;
            if let Some(notification) = form.try_update(|f| f.finish_submit(response)) {
                toaster.notify(notification);
            }
        });
    };

    view! {
        <form on:submit=on_submit novalidate=true class="space-y-4">
            <TextField form=form field=Field::Name placeholder="Your Name"/>
            <TextField
                form=form
                field=Field::Email
                input_type="email"
                placeholder="your.email@example.com"
            />
            <SubjectSelect form=form/>
            <TextAreaField form=form field=Field::Message placeholder="How can we help you?"/>

            <button
                type="submit"
                class="w-full py-3 rounded-lg font-semibold btn-cta-custom transform transition-transform hover:scale-105 disabled:opacity-60 text-sm sm:text-base"
                prop:disabled=is_submitting
            >
                {move || submit_label(is_submitting())}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_label_follows_busy_state() {
        assert_eq!(submit_label(false), "Send Message");
        assert_eq!(submit_label(true), "Sending...");
    }

    #[test]
    fn test_busy_flag_drives_label() {
        let mut form = FormController::new();
        form.set_field(Field::Name, "Jane Doe");
        form.set_field(Field::Email, "jane@example.com");
        form.set_field(Field::Subject, "Life Insurance");
        form.set_field(Field::Message, "Please call me back");
        assert_eq!(submit_label(form.is_submitting()), "Send Message");

        assert!(matches!(form.begin_submit(), SubmitAttempt::Dispatched(_)));
        assert_eq!(submit_label(form.is_submitting()), "Sending...");
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_server_render_is_placeholder_only() {
        let html = leptos::ssr::render_to_string(|| {
            provide_context(RouterIntegrationContext::new(ServerIntegration {
                path: "http://localhost/contact?service=Bonds".to_string(),
            }));
            provide_toaster();
            view! {
                <Router>
                    <ContactPage/>
                </Router>
            }
        })
        .to_string();

        assert!(!html.contains("<form"));
        assert!(!html.contains("Send Message"));
        assert!(!html.contains("Contact Us"));
        assert!(!html.contains("wa.me"));
    }
}
