//! fixture controllers
//! - calibration: discover the safe limit of every channel
//! - color: scale requested fractions into codes below those limits
//! - limit_dao: persist limits and level between sessions

pub mod calibration;
pub mod color;
pub mod limit_dao;
