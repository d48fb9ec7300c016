//! Site footer

use beart_contact::links::{EMAIL_ADDRESS, PHONE_DISPLAY, PHONE_E164};
use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    let tel = format!("tel:{}", PHONE_E164);
    let mailto = format!("mailto:{}", EMAIL_ADDRESS);

    view! {
        <footer class="border-t border-gray-200 py-8">
            <div class="container mx-auto px-4 flex flex-col md:flex-row justify-between gap-4 text-sm text-gray-600">
                <p>"© Beart India"</p>
                <div class="flex gap-6">
                    <a href=tel class="hover:text-gray-900">{PHONE_DISPLAY}</a>
                    <a href=mailto class="hover:text-gray-900">{EMAIL_ADDRESS}</a>
                </div>
            </div>
        </footer>
    }
}
