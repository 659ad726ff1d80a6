//! color controller
//! - scale brightness fractions by calibrated limits into channel codes
//! - make sure the level is initialized once before any color is applied

use crate::common::error::FixtureError;
use crate::driver::traits::FixtureDevice;
use crate::entity::channel::{BrightnessLevel, ChannelValues, LimitSet, CHANNEL_NUM, FULL_LEVEL};
use crate::{debug, info};

const LOG_TAG: &str = "ColorController";

/// requested color, as fractions of the calibrated limits
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColourRequest {
    Global(f64),
    PerChannel([f64; CHANNEL_NUM]),
}

impl ColourRequest {
    /// one fraction for all channels, or exactly one per channel
    pub fn from_fractions(fractions: &[f64]) -> Result<Self, FixtureError> {
        match fractions {
            [k] => Ok(ColourRequest::Global(*k)),
            [r, g, b, w] => Ok(ColourRequest::PerChannel([*r, *g, *b, *w])),
            _ => Err(FixtureError::Config(format!(
                "colour takes 1 or {} fractions, got {}",
                CHANNEL_NUM,
                fractions.len()
            ))),
        }
    }

    pub fn fractions(&self) -> [f64; CHANNEL_NUM] {
        match self {
            ColourRequest::Global(k) => [*k; CHANNEL_NUM],
            ColourRequest::PerChannel(fractions) => *fractions,
        }
    }
}

/// level to initialize with: a missing or zero stored level means full level
///
/// A deliberately stored level of 0 is indistinguishable from no level.
pub fn resolve_level(stored: Option<BrightnessLevel>) -> BrightnessLevel {
    match stored {
        Some(level) if level != 0 => level,
        _ => FULL_LEVEL,
    }
}

/// `floor(fraction * limit)` per channel
///
/// Fractions are not clamped. Results past the u8 range saturate at 255 and
/// negative or NaN results become 0.
pub fn scale_limits(limits: &LimitSet, fractions: [f64; CHANNEL_NUM]) -> ChannelValues {
    let mut values = [0; CHANNEL_NUM];
    for (i, value) in values.iter_mut().enumerate() {
        *value = (fractions[i] * limits.0[i] as f64).floor() as u8;
    }
    values
}

pub struct ColorController<'a, D: FixtureDevice + ?Sized> {
    device: &'a D,
    // level resolved from the store, sent on first use
    level: BrightnessLevel,
    level_initialized: bool,
}

impl<'a, D: FixtureDevice + ?Sized> ColorController<'a, D> {
    pub fn new(device: &'a D, stored_level: Option<BrightnessLevel>) -> Self {
        ColorController {
            device,
            level: resolve_level(stored_level),
            level_initialized: false,
        }
    }

    pub fn level(&self) -> BrightnessLevel {
        self.level
    }

    /// send the session level, only the first call reaches the device
    pub async fn ensure_level(&mut self) -> Result<BrightnessLevel, FixtureError> {
        if !self.level_initialized {
            self.device.set_level(self.level).await?;
            self.level_initialized = true;
            debug!(LOG_TAG, "level initialized to {}", self.level);
        }
        Ok(self.level)
    }

    pub async fn apply(&mut self, limits: &LimitSet, request: ColourRequest) -> Result<ChannelValues, FixtureError> {
        let values = scale_limits(limits, request.fractions());
        self.ensure_level().await?;
        self.device.set_channels(values).await?;
        info!(LOG_TAG, "applied {:?} with limits {}: {:?}", request, limits, values);
        Ok(values)
    }

    /// every channel at 255, ignoring calibration
    pub async fn full(&mut self) -> Result<(), FixtureError> {
        self.ensure_level().await?;
        self.device.set_channels([255; CHANNEL_NUM]).await?;
        info!(LOG_TAG, "all channels full");
        Ok(())
    }

    /// every channel at 0, the level is left untouched
    pub async fn off(&self) -> Result<(), FixtureError> {
        self.device.set_channels([0; CHANNEL_NUM]).await?;
        info!(LOG_TAG, "all channels off");
        Ok(())
    }
}
