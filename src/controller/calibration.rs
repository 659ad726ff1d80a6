//! channel limit calibration
//!
//! The limit of a channel is found with a binary search against the hardware
//! trip signal. One calibration repeats the search for every channel
//! `num_runs` times and keeps, per channel, the sample at index
//! `num_runs / 2` of the sorted samples (the upper middle one for even counts).

use crate::common::error::FixtureError;
use crate::driver::traits::FixtureDevice;
use crate::entity::channel::{Channel, ChannelLimit, LimitSet, CHANNEL_NUM, FULL_LEVEL, OFF_LEVEL};
use crate::{debug, info};

const LOG_TAG: &str = "Calibration";

pub const SEARCH_LOW: ChannelLimit = 0;
pub const SEARCH_HIGH: ChannelLimit = 255;

pub struct CalibrationEngine<'a, D: FixtureDevice + ?Sized> {
    device: &'a D,
}

impl<'a, D: FixtureDevice + ?Sized> CalibrationEngine<'a, D> {
    pub fn new(device: &'a D) -> Self {
        CalibrationEngine { device }
    }

    /// binary search the largest value in `[lo, hi]` that does not trip `channel`
    ///
    /// `lo` is assumed safe and `hi` is assumed to trip, neither is probed.
    /// While probing, `channel` is the only nonzero channel so the trip signal
    /// read back belongs to it alone. Every step is one write then one read.
    /// The range shrinks on every step, so the search ends even when the
    /// signal is not monotonic; the result is then unspecified.
    pub async fn find_limit(&self, channel: Channel, lo: ChannelLimit, hi: ChannelLimit) -> Result<ChannelLimit, FixtureError> {
        if lo > hi {
            return Err(FixtureError::Config(format!("invalid search range [{}, {}]", lo, hi)));
        }

        let (mut lo, mut hi) = (lo, hi);
        let mut step = 0;
        loop {
            let mid = ((lo as u16 + hi as u16) / 2) as ChannelLimit;
            if mid == lo {
                debug!(LOG_TAG, "{} converged to {} after {} steps", channel, lo, step);
                return Ok(lo);
            }

            self.device.set_channels(channel.isolated(mid)).await?;
            let tripped = self.device.get_limit_signal(channel).await?;
            step += 1;
            debug!(LOG_TAG, "{} step {}: probe {} in [{}, {}], tripped: {}", channel, step, mid, lo, hi, tripped);

            if tripped {
                hi = mid;
            } else {
                lo = mid;
            }
        }
    }

    /// one limit discovery pass over all channels, in channel order
    pub async fn run_once(&self) -> Result<LimitSet, FixtureError> {
        let mut limits = [0; CHANNEL_NUM];
        for channel in Channel::ALL {
            limits[channel.index()] = self.find_limit(channel, SEARCH_LOW, SEARCH_HIGH).await?;
        }
        Ok(LimitSet(limits))
    }

    /// run `num_runs` passes at full level and aggregate them
    ///
    /// Any failure aborts the whole calibration, no partial result is produced.
    /// With `verbose`, the raw sample of every run is printed.
    pub async fn calibrate(&self, num_runs: usize, verbose: bool) -> Result<LimitSet, FixtureError> {
        if num_runs == 0 {
            return Err(FixtureError::Config("calibration needs at least one run".to_string()));
        }

        // trip behaviour at worst case current draw
        self.device.set_level(FULL_LEVEL).await?;

        let mut samples = Vec::with_capacity(num_runs);
        for run in 0..num_runs {
            let sample = self.run_once().await?;
            info!(LOG_TAG, "run {}/{}: {}", run + 1, num_runs, sample);
            if verbose {
                println!("{}", sample);
            }
            samples.push(sample);
        }

        self.device.set_level(OFF_LEVEL).await?;

        let limits = aggregate_runs(&samples)
            .ok_or(FixtureError::Config("calibration produced no samples".to_string()))?;
        info!(LOG_TAG, "calibrated limits over {} runs: {}", num_runs, limits);
        Ok(limits)
    }
}

/// per channel, sort the samples and pick the one at index `len / 2`
pub fn aggregate_runs(samples: &[LimitSet]) -> Option<LimitSet> {
    if samples.is_empty() {
        return None;
    }

    let mut limits = [0; CHANNEL_NUM];
    for channel in Channel::ALL {
        let mut values: Vec<ChannelLimit> = samples.iter().map(|s| s.get(channel)).collect();
        values.sort_unstable();
        limits[channel.index()] = values[samples.len() / 2];
    }
    Some(LimitSet(limits))
}
