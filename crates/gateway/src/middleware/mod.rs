//! Cross-cutting middleware.

mod recover;

pub use recover::catch_panic_layer;
