//! Site pages

mod contact;

pub use contact::ContactPage;
