pub mod color;
pub mod error;
pub mod gradient;
pub mod placer;
pub mod scheme;
pub mod zone;

// Re-export primary types for convenience.
pub use color::{hex_to_rgb, hsl_to_rgb, rgb_distance, rgb_to_hex, ColorStop};
pub use error::CoreError;
pub use gradient::GradientDescriptor;
pub use placer::place;
pub use scheme::ColorScheme;
pub use zone::{Position, SafeZone};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
