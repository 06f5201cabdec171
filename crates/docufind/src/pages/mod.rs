//! Routed pages.

mod home;
mod viewer;

pub use home::Home;
pub use viewer::Viewer;
