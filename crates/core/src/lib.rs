//! Domain primitives shared by the invitation service and the page view.

pub mod error;
pub mod slug;
