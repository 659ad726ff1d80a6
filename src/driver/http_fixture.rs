//! http fixture client
//!
//! | operation  | request     | body                |
//! |------------|-------------|---------------------|
//! | set level  | PUT /level  | `L<level>`          |
//! | set codes  | PUT /ctrl   | `W<c0>,<c1>,<c2>,<c3>` |
//! | limit      | GET /limit  | json, one field per pin |

use std::time::Duration;
use async_trait::async_trait;

use super::traits::FixtureDevice;
use crate::common::error::FixtureError;
use crate::common::http;
use crate::common::setting;
use crate::entity::channel::{BrightnessLevel, Channel, ChannelValues, CHANNEL_NUM};
use crate::entity::dto::limit_signal_dto::LimitSignalDto;
use crate::debug;

const LOG_TAG: &str = "HttpFixture";

const LEVEL_URL: &str = "level";
const CTRL_URL: &str = "ctrl";
const LIMIT_URL: &str = "limit";

pub struct HttpFixture {
    client: reqwest::Client,
    base_url: String,
    // wait after every successful write
    settle: Duration,
    // limit status field per channel
    limit_pins: [String; CHANNEL_NUM],
}

impl HttpFixture {
    pub fn new(base_url: &str, settle: Duration, limit_pins: [String; CHANNEL_NUM]) -> Self {
        HttpFixture {
            client: reqwest::Client::new(),
            base_url: base_url.to_string(),
            settle,
            limit_pins,
        }
    }

    pub fn from_settings(device: &setting::Device) -> Self {
        HttpFixture::new(
            device.base_url.as_str(),
            Duration::from_millis(device.settle_ms),
            device.limit_pins.clone(),
        )
    }

    /// post write wait, the trip signal is transient right after a change
    async fn settle(&self) {
        tokio::time::sleep(self.settle).await;
    }
}

#[async_trait]
impl FixtureDevice for HttpFixture {
    async fn set_level(&self, level: BrightnessLevel) -> Result<(), FixtureError> {
        http::api_put(&self.client, &self.base_url, LEVEL_URL, level_body(level)).await?;
        debug!(LOG_TAG, "level set to {}", level);
        self.settle().await;
        Ok(())
    }

    async fn set_channels(&self, values: ChannelValues) -> Result<(), FixtureError> {
        http::api_put(&self.client, &self.base_url, CTRL_URL, channels_body(values)).await?;
        debug!(LOG_TAG, "channels set to {:?}", values);
        self.settle().await;
        Ok(())
    }

    async fn get_limit_signal(&self, channel: Channel) -> Result<bool, FixtureError> {
        let data = http::api_get(&self.client, &self.base_url, LIMIT_URL).await?;
        let status = LimitSignalDto::from_json(&data, &self.limit_pins)?;
        debug!(LOG_TAG, "limit status {:?}, read {}", status.tripped, channel);
        Ok(status.is_tripped(channel))
    }
}

pub fn level_body(level: BrightnessLevel) -> String {
    format!("L{}", level)
}

pub fn channels_body(values: ChannelValues) -> String {
    format!("W{},{},{},{}", values[0], values[1], values[2], values[3])
}
