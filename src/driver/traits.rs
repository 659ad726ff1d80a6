use async_trait::async_trait;

use crate::common::error::FixtureError;
use crate::entity::channel::{BrightnessLevel, Channel, ChannelValues};

/// a four channel fixture with a readable limit trip signal
///
/// Calls are strictly sequential. A successful write returns only after the
/// fixture has settled, so a read issued right after reflects that write.
#[async_trait]
pub trait FixtureDevice: Send + Sync {
    /// set the global level
    async fn set_level(&self, level: BrightnessLevel) -> Result<(), FixtureError>;

    /// set all four channel codes in one command
    async fn set_channels(&self, values: ChannelValues) -> Result<(), FixtureError>;

    /// current trip state of one channel
    async fn get_limit_signal(&self, channel: Channel) -> Result<bool, FixtureError>;
}
