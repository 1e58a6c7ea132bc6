use crate::error::FireError;
use crate::fire::palette::Palette;
use crate::fire::step::EdgePolicy;
use crate::settings::Settings;
use std::time::Duration;

/// Default grid size for headless runs
pub const DEFAULT_WIDTH: usize = 320;
pub const DEFAULT_HEIGHT: usize = 160;
/// Classic fire cadence, about 37ms per frame
pub const DEFAULT_FRAME_RATE: u32 = 27;
/// Highest supported frame rate
pub const MAX_FRAME_RATE: u32 = 240;
/// Most screen cells a frame may cover, grid cells times `pixel_size` squared
pub const MAX_SCREEN_CELLS: usize = 1 << 22;

/// Configuration for one fire simulation, fixed at startup
#[derive(Debug, Clone, PartialEq)]
pub struct FireConfig {
    pub width: usize,
    pub height: usize,
    /// Screen cells per grid cell along each axis
    pub pixel_size: u32,
    /// Ticks per second
    pub frame_rate: u32,
    pub seed: Option<u64>,
    pub edge: EdgePolicy,
    pub palette: Palette,
}

impl Default for FireConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            pixel_size: 1,
            frame_rate: DEFAULT_FRAME_RATE,
            seed: None,
            edge: EdgePolicy::default(),
            palette: Palette::doom(),
        }
    }
}

/// Command-line values; `None` leaves the settings file or default in place
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub pixel_size: Option<u32>,
    pub frame_rate: Option<u32>,
    pub seed: Option<u64>,
    pub edge: Option<EdgePolicy>,
}

impl FireConfig {
    /// Layer settings file values, then command-line overrides, over the defaults
    pub fn resolve(settings: &Settings, overrides: &Overrides) -> Result<Self, FireError> {
        let mut config = Self::default();

        if let Some(colors) = &settings.palette {
            config.palette = Palette::from_hex(colors)?;
        }

        config.width = overrides.width.or(settings.width).unwrap_or(config.width);
        config.height = overrides.height.or(settings.height).unwrap_or(config.height);
        config.pixel_size = overrides.pixel_size.or(settings.pixel_size).unwrap_or(config.pixel_size);
        config.frame_rate = overrides.frame_rate.or(settings.frame_rate).unwrap_or(config.frame_rate);
        config.seed = overrides.seed.or(settings.seed);
        config.edge = overrides.edge.or(settings.edge).unwrap_or(config.edge);

        config.validate()?;
        Ok(config)
    }

    /// Reject values that would index out of bounds or draw nothing
    pub fn validate(&self) -> Result<(), FireError> {
        if self.width == 0 || self.height < 2 || self.width.checked_mul(self.height).is_none() {
            return Err(FireError::InvalidDimensions { width: self.width, height: self.height });
        }
        if self.pixel_size == 0 {
            return Err(FireError::InvalidPixelSize(self.pixel_size));
        }
        if !(1..=MAX_FRAME_RATE).contains(&self.frame_rate) {
            return Err(FireError::InvalidFrameRate(self.frame_rate));
        }
        self.screen_size()?;
        // palette length is fixed by its type; Palette::from_colors checks it
        Ok(())
    }

    /// Screen cells covered by the scaled grid, as `(cols, rows)`.
    /// Each side must fit a terminal coordinate and the area stays under `MAX_SCREEN_CELLS`.
    pub fn screen_size(&self) -> Result<(u16, u16), FireError> {
        let too_large = || FireError::FrameTooLarge {
            width: self.width,
            height: self.height,
            pixel_size: self.pixel_size,
        };
        let size = self.pixel_size as usize;
        let cols = self.width.checked_mul(size).and_then(|c| u16::try_from(c).ok()).ok_or_else(too_large)?;
        let rows = self.height.checked_mul(size).and_then(|r| u16::try_from(r).ok()).ok_or_else(too_large)?;
        if cols as usize * rows as usize > MAX_SCREEN_CELLS {
            return Err(too_large());
        }
        Ok((cols, rows))
    }

    /// Wall-clock time budget of one tick
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.frame_rate.max(1)))
    }

    /// Largest grid whose scaled cells fit a `cols` x `rows` screen
    pub fn fit_to_screen(&mut self, cols: u16, rows: u16) {
        let size = self.pixel_size.max(1) as usize;
        self.width = (cols as usize / size).max(1);
        self.height = (rows as usize / size).max(2);
    }
}
