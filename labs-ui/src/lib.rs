//! labs-ui - View components for the labs site
//!
//! Pure, props-based components plus the shell that composes them from a
//! path. Routing lives in labs-web; nothing here depends on the router.

pub mod components;

pub use components::*;
