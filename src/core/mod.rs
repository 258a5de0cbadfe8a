//! Page state and content, free of any browser API

pub mod accordion;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod counter;
pub mod focus;
pub mod lightbox;
pub mod menu;
pub mod notification;
pub mod reveal;
pub mod scroll;
pub mod submission;
pub mod validation;
#[cfg(test)]
mod tests;

pub use accordion::Accordion;
pub use content::*;
pub use counter::{CounterAnimation, parse_target};
pub use focus::HoverFocus;
pub use lightbox::Lightbox;
pub use menu::MenuState;
pub use notification::{Notification, NotificationKind, NotificationSlot};
pub use reveal::{OneShot, RevealOptions};
pub use scroll::{NavHighlight, SectionBounds, active_section, hero_parallax, is_scrolled};
pub use submission::{
    ContactFormState, ContactGateway, SubmitError, SubmitOutcome, SubmitPhase,
};
pub use validation::{ContactForm, ContactRequest, FieldErrors};
