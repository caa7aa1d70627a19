//! UI controllers.
//!
//! Each controller is a plain value holding exactly the state its page
//! element would encode (an "open" flag, the current slide, ...). Methods
//! take the triggering input and return what changed; the
//! [`Storefront`](crate::app::Storefront) turns that into effects.

pub mod back_to_top;
pub mod contact;
pub mod dark_mode;
pub mod dropdown;
pub mod faq;
pub mod navbar;
pub mod newsletter;
pub mod promo;
pub mod search;
pub mod shortcuts;
pub mod sidebar;
pub mod slider;
pub mod visitor;

pub use back_to_top::BackToTop;
pub use contact::{ContactField, ContactForm, ContactSubmission, FieldError};
pub use dark_mode::DarkMode;
pub use dropdown::DropdownMenu;
pub use faq::FaqAccordion;
pub use navbar::{NavbarScroll, NavbarState};
pub use newsletter::Newsletter;
pub use promo::{Promo, PromoBanner};
pub use search::{Search, SearchRoute};
pub use shortcuts::{KeyPress, KeyboardShortcuts, Shortcut};
pub use sidebar::Sidebar;
pub use slider::TestimonialSlider;
pub use visitor::{VisitGreeting, VisitorCounter};
