//! decoded response of the limit status endpoint
//! the device answers with one field per hardware pin, 0 = not tripped, nonzero = tripped

use serde_json::Value;

use crate::common::error::FixtureError;
use crate::entity::channel::{Channel, CHANNEL_NUM};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitSignalDto {
    /// trip state in channel order
    pub tripped: [bool; CHANNEL_NUM],
}

impl LimitSignalDto {
    /// map the pin fields of `data` onto channels, `pins` is in channel order
    pub fn from_json(data: &Value, pins: &[String; CHANNEL_NUM]) -> Result<Self, FixtureError> {
        let mut tripped = [false; CHANNEL_NUM];
        for channel in Channel::ALL {
            tripped[channel.index()] = pin_tripped(data, &pins[channel.index()])?;
        }
        Ok(LimitSignalDto { tripped })
    }

    pub fn is_tripped(&self, channel: Channel) -> bool {
        self.tripped[channel.index()]
    }
}

/// read a single pin field
pub fn pin_tripped(data: &Value, pin: &str) -> Result<bool, FixtureError> {
    let field = data
        .get(pin)
        .ok_or(FixtureError::Signal(format!("cannot find pin {} in limit status: {}", pin, data)))?;
    if let Some(v) = field.as_i64() {
        return Ok(v != 0);
    }
    if let Some(v) = field.as_u64() {
        return Ok(v != 0);
    }
    Err(FixtureError::Signal(format!("pin {} is not an integer: {}", pin, field)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pins() -> [String; CHANNEL_NUM] {
        ["A", "B", "C", "D"].map(String::from)
    }

    #[test]
    fn test_positional_mapping() {
        let data = json!({"A": 0, "B": 1, "C": 0, "D": 7});
        let dto = LimitSignalDto::from_json(&data, &pins()).unwrap();
        assert!(!dto.is_tripped(Channel::Red));
        assert!(dto.is_tripped(Channel::Green));
        assert!(!dto.is_tripped(Channel::Blue));
        assert!(dto.is_tripped(Channel::White));
    }

    #[test]
    fn test_missing_pin() {
        let data = json!({"A": 0, "B": 0, "C": 0});
        let result = LimitSignalDto::from_json(&data, &pins());
        assert!(matches!(result, Err(FixtureError::Signal(_))));
    }

    #[test]
    fn test_non_integer_pin() {
        let data = json!({"A": "high"});
        assert!(matches!(pin_tripped(&data, "A"), Err(FixtureError::Signal(_))));
    }
}
