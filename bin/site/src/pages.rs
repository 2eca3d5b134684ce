//! Page components for the three routes.

pub mod about;
pub mod home;
pub mod order;

pub use about::AboutPage;
pub use home::HomePage;
pub use order::OrderPage;
