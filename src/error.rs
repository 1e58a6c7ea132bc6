use std::path::PathBuf;

/// Errors raised while building a fire simulation from its configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FireError {
    /// Grid must be at least one column wide and two rows tall
    InvalidDimensions { width: usize, height: usize },
    /// Each grid cell must cover at least one screen cell
    InvalidPixelSize(u32),
    /// Scaled grid too large to draw
    FrameTooLarge { width: usize, height: usize, pixel_size: u32 },
    /// Frame rate outside the supported range
    InvalidFrameRate(u32),
    /// Palette does not hold one color per intensity level
    PaletteLength { expected: usize, actual: usize },
    /// Color string that is not `#rrggbb`
    InvalidColor(String),
    /// Settings file exists but could not be read or parsed
    Settings { path: PathBuf, message: String },
}

impl std::fmt::Display for FireError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FireError::InvalidDimensions { width, height } => write!(
                f,
                "invalid grid dimensions {width}x{height} (need width >= 1, height >= 2)"
            ),
            FireError::InvalidPixelSize(size) => {
                write!(f, "invalid pixel size {size} (must be at least 1)")
            }
            FireError::FrameTooLarge { width, height, pixel_size } => write!(
                f,
                "frame too large: {width}x{height} grid at pixel size {pixel_size} exceeds the drawable screen"
            ),
            FireError::InvalidFrameRate(fps) => {
                write!(f, "invalid frame rate {fps} (must be within 1..=240)")
            }
            FireError::PaletteLength { expected, actual } => {
                write!(f, "palette has {actual} colors, expected {expected}")
            }
            FireError::InvalidColor(color) => {
                write!(f, "invalid color {color:?} (expected #rrggbb)")
            }
            FireError::Settings { path, message } => {
                write!(f, "failed to load settings from {}: {message}", path.display())
            }
        }
    }
}

impl std::error::Error for FireError {}
