//! Card and link components for the contact page

use beart_contact::{DirectLink, LinkKind};
use leptos::*;

#[component]
pub fn Card(
    title: &'static str,
    description: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="max-w-2xl w-full mx-auto animate-in fade-in zoom-in-95 duration-500">
            <div class="text-left mb-6">
                <h1 class="text-2xl sm:text-3xl md:text-4xl font-bold">{title}</h1>
                <p class="text-sm sm:text-base text-gray-600 mt-2">{description}</p>
            </div>
            <div>{children()}</div>
        </div>
    }
}

#[component]
pub fn Separator() -> impl IntoView {
    view! { <hr class="my-4 md:my-6 border-gray-200"/> }
}

fn icon_for(kind: LinkKind) -> &'static str {
    match kind {
        LinkKind::WhatsApp => "💬",
        LinkKind::Phone => "📞",
        LinkKind::Email => "✉️",
        LinkKind::Consultation => "📄",
    }
}

#[component]
pub fn DirectLinkButton(link: &'static DirectLink) -> impl IntoView {
    let (target, rel) = if link.new_tab {
        (Some("_blank"), Some("noopener noreferrer"))
    } else {
        (None, None)
    };

    view! {
        <a
            href=link.href
            target=target
            rel=rel
            class="w-full flex items-center justify-start gap-2 px-6 py-3 rounded-lg btn-cta-custom transform transition-transform hover:scale-105 text-sm sm:text-base"
        >
            <span aria-hidden="true">{icon_for(link.kind)}</span>
            {link.label}
        </a>
    }
}
