//! simulated fixture
//! a channel trips once its code is above its threshold, every call is recorded

use std::sync::{Mutex, MutexGuard};
use async_trait::async_trait;

use super::traits::FixtureDevice;
use crate::common::error::FixtureError;
use crate::entity::channel::{BrightnessLevel, Channel, ChannelValues, CHANNEL_NUM};
use crate::debug;

const LOG_TAG: &str = "DummyFixture";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureCall {
    SetLevel(BrightnessLevel),
    SetChannels(ChannelValues),
    GetLimitSignal(Channel),
}

#[derive(Debug, Default)]
struct DummyState {
    level: BrightnessLevel,
    values: ChannelValues,
    calls: Vec<FixtureCall>,
}

#[derive(Debug)]
pub struct DummyFixture {
    thresholds: [u8; CHANNEL_NUM],
    state: Mutex<DummyState>,
}

impl DummyFixture {
    pub fn new(thresholds: [u8; CHANNEL_NUM]) -> Self {
        DummyFixture {
            thresholds,
            state: Mutex::new(DummyState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, DummyState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn calls(&self) -> Vec<FixtureCall> {
        self.state().calls.clone()
    }

    pub fn level(&self) -> BrightnessLevel {
        self.state().level
    }

    pub fn values(&self) -> ChannelValues {
        self.state().values
    }
}

#[async_trait]
impl FixtureDevice for DummyFixture {
    async fn set_level(&self, level: BrightnessLevel) -> Result<(), FixtureError> {
        let mut state = self.state();
        state.level = level;
        state.calls.push(FixtureCall::SetLevel(level));
        debug!(LOG_TAG, "level set to {}", level);
        Ok(())
    }

    async fn set_channels(&self, values: ChannelValues) -> Result<(), FixtureError> {
        let mut state = self.state();
        state.values = values;
        state.calls.push(FixtureCall::SetChannels(values));
        debug!(LOG_TAG, "channels set to {:?}", values);
        Ok(())
    }

    async fn get_limit_signal(&self, channel: Channel) -> Result<bool, FixtureError> {
        let mut state = self.state();
        state.calls.push(FixtureCall::GetLimitSignal(channel));
        Ok(state.values[channel.index()] > self.thresholds[channel.index()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trips_above_threshold() {
        let fixture = DummyFixture::new([100, 150, 200, 50]);
        fixture.set_channels([100, 0, 0, 0]).await.unwrap();
        assert!(!fixture.get_limit_signal(Channel::Red).await.unwrap());
        fixture.set_channels([101, 0, 0, 0]).await.unwrap();
        assert!(fixture.get_limit_signal(Channel::Red).await.unwrap());
        assert!(!fixture.get_limit_signal(Channel::White).await.unwrap());
        assert_eq!(fixture.calls().len(), 5);
    }
}
