//! The one typed error boundary in the core (§7): loading an
//! [`crate::EngineConfig`]. Everything inside `css`, `layout`, `selection`,
//! and `paint` skips, clamps, or falls back instead of returning `Result`;
//! matches the `thiserror` convention already present in this pack's
//! `AlvinKuruvilla-koala` and `BigBadE-valor` repos.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("viewport dimensions must be positive, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    #[error("base font size must be positive, got {0}px")]
    InvalidBaseFontSize(f32),

    #[error("embedded user-agent stylesheet parsed to zero rules")]
    EmptyUserAgentStylesheet,

    #[error("user-agent stylesheet override parsed to zero rules")]
    EmptyUserAgentOverride,
}
