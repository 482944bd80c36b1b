use thiserror::Error;

/// Errors originating from the rasterization/resolution pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("degenerate viewport: {width}×{height} (nothing to rasterize)")]
    DegenerateViewport { width: u32, height: u32 },

    #[error(transparent)]
    Core(#[from] huespot_core::CoreError),
}
