pub mod buffer;
pub mod error;
pub mod export;
pub mod rasterize;
pub mod resolver;

pub use buffer::PixelBuffer;
pub use error::RenderError;
pub use export::{export_png, stamp_markers};
pub use rasterize::rasterize;
pub use resolver::{resolve, resolve_all, ResolvedPosition, EXACT_TOLERANCE, SAMPLE_STRIDE};

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
