//! Ties `dom`, `css`, `layout`, `selection`, and `paint` together into a
//! per-frame pipeline, plus the one typed error boundary in the core: an
//! invalid [`EngineConfig`].

mod config;
mod error;
mod frame;

pub use config::EngineConfig;
pub use error::EngineError;
pub use frame::{Engine, Frame};

/// Initializes `env_logger` from `RUST_LOG`, same convention the pack's
/// other repos use (`env_logger::builder()...try_init()`), idempotent so
/// callers and tests can both call it without conflict.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(cfg!(test)).try_init();
}
