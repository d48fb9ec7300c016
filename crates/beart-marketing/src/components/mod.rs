//! Site components

mod card;
mod fields;
mod footer;
mod nav;
mod toast;

pub use card::*;
pub use fields::*;
pub use footer::Footer;
pub use nav::SiteNav;
pub use toast::{provide_toaster, use_toaster, ToastViewport, Toaster};
