//! Direct contact links shown beside the form

use serde::Serialize;

pub const PHONE_DISPLAY: &str = "+91-9145656666";
pub const PHONE_E164: &str = "+919145656666";
pub const EMAIL_ADDRESS: &str = "info@beartindia.com";
pub const CONTACT_PATH: &str = "/contact";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LinkKind {
    WhatsApp,
    Phone,
    Email,
    Consultation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DirectLink {
    pub kind: LinkKind,
    pub href: &'static str,
    pub label: &'static str,
    /// Open in a new tab (external apps)
    pub new_tab: bool,
}

pub static DIRECT_LINKS: [DirectLink; 4] = [
    DirectLink {
        kind: LinkKind::WhatsApp,
        href: "https://wa.me/919145656666",
        label: "WhatsApp Us (+91-9145656666)",
        new_tab: true,
    },
    DirectLink {
        kind: LinkKind::Phone,
        href: "tel:+919145656666",
        label: "Call +91-9145656666",
        new_tab: false,
    },
    DirectLink {
        kind: LinkKind::Email,
        href: "mailto:info@beartindia.com",
        label: "Email: info@beartindia.com",
        new_tab: false,
    },
    DirectLink {
        kind: LinkKind::Consultation,
        href: "/contact?service=Consultation",
        label: "Schedule a Free Consultation",
        new_tab: false,
    },
];

/// Contact page link with a pre-filled `service` query parameter
pub fn consultation_href(service: &str) -> String {
    format!("{}?service={}", CONTACT_PATH, urlencoding::encode(service))
}
