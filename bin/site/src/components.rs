//! Reusable view components.
//!
//! Components here hold no navigation state. They receive the current route
//! and report intents upward through callbacks; only the carousel and the
//! order form own local state.

pub mod carousel;
pub mod drawer;
pub mod footer;
pub mod header;
pub mod order_form;

pub use carousel::Carousel;
pub use drawer::ContactsDrawer;
pub use footer::Footer;
pub use header::Header;
pub use order_form::OrderForm;
