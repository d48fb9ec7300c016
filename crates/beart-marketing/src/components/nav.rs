//! Site navigation

use beart_contact::links::{self, LinkKind, DIRECT_LINKS};
use leptos::*;

fn consultation() -> &'static str {
    DIRECT_LINKS
        .iter()
        .find(|link| link.kind == LinkKind::Consultation)
        .map(|link| link.href)
        .unwrap_or(links::CONTACT_PATH)
}

#[component]
pub fn SiteNav() -> impl IntoView {
    let (mobile_open, set_mobile_open) = create_signal(false);

    view! {
        <nav class="bg-white shadow-sm sticky top-0 z-40">
            <div class="container mx-auto px-4">
                <div class="flex justify-between h-16">
                    <div class="flex items-center">
                        <a href="/" class="text-xl font-bold text-gray-900">"Beart India"</a>
                    </div>

                    <div class="hidden md:flex items-center space-x-8">
                        <a href=links::CONTACT_PATH class="text-gray-600 hover:text-gray-900 transition">"Contact"</a>
                        <a href=consultation() class="px-4 py-2 btn-cta-custom font-medium rounded-lg transition">
                            "Free Consultation"
                        </a>
                    </div>

                    <div class="md:hidden flex items-center">
                        <button
                            class="p-2 rounded-md text-gray-600 hover:text-gray-900 hover:bg-gray-100"
                            aria-label="Toggle menu"
                            on:click=move |_| set_mobile_open.update(|v| *v = !*v)
                        >
                            <Show
                                when=move || mobile_open.get()
                                fallback=|| view! {
                                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                    </svg>
                                }
                            >
                                <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                                </svg>
                            </Show>
                        </button>
                    </div>
                </div>
            </div>

            <Show when=move || mobile_open.get()>
                <div class="md:hidden border-t border-gray-200">
                    <div class="px-4 py-4 space-y-3">
                        <a href=links::CONTACT_PATH class="block text-gray-600 hover:text-gray-900">"Contact"</a>
                        <a href=consultation() class="block w-full text-center px-4 py-2 btn-cta-custom font-medium rounded-lg">
                            "Free Consultation"
                        </a>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
