//! channel types of the four channel fixture
//! - `ChannelValue` is the device code written to one channel
//! - `LimitSet` holds the calibrated maximum code of every channel, in channel order

use std::fmt::{Display, Formatter};
use std::fmt;
use serde::{Deserialize, Serialize};

pub const CHANNEL_NUM: usize = 4;

pub type ChannelValue = u8;
pub type ChannelLimit = u8;
pub type BrightnessLevel = u8;

/// codes for all four channels, sent together in one command
pub type ChannelValues = [ChannelValue; CHANNEL_NUM];

pub const FULL_LEVEL: BrightnessLevel = 255;
pub const OFF_LEVEL: BrightnessLevel = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red = 0,
    Green = 1,
    Blue = 2,
    White = 3,
}

impl Channel {
    /// fixed calibration order
    pub const ALL: [Channel; CHANNEL_NUM] = [Channel::Red, Channel::Green, Channel::Blue, Channel::White];

    pub fn index(self) -> usize {
        self as usize
    }

    /// channel values where only `self` carries `value` and every other channel is 0
    pub fn isolated(self, value: ChannelValue) -> ChannelValues {
        let mut values = [0; CHANNEL_NUM];
        values[self.index()] = value;
        values
    }
}

impl Display for Channel {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::White => "white",
        };
        write!(f, "{}({})", name, self.index())
    }
}

/// calibrated limit of every channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LimitSet(pub [ChannelLimit; CHANNEL_NUM]);

impl LimitSet {
    pub fn get(&self, channel: Channel) -> ChannelLimit {
        self.0[channel.index()]
    }
}

impl Display for LimitSet {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{},{},{},{}", self.0[0], self.0[1], self.0[2], self.0[3])
    }
}
