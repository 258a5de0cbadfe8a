pub mod common;
pub mod contact_form;
#[cfg(not(feature = "ssr"))]
pub mod dom;
pub mod faq;
pub mod gallery;
pub mod icon;
pub mod navbar;
pub mod notifications;
pub mod pages;
pub mod reveal;
pub mod stats;

pub use icon::{Icon, icons};
pub use notifications::{NotificationContext, provide_notification_context, use_notification_context};
pub use pages::{LandingPage, NotFoundPage, SiteUrl};
