use crate::frame::DeviceFacing;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub initial_facing: DeviceFacing,
    pub frame_interval: Duration,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_facing: DeviceFacing::Back,
            frame_interval: Duration::from_millis(500),
            logger_timezone: mountain_standard_time(),
        }
    }
}

fn mountain_standard_time() -> chrono::FixedOffset {
    chrono::FixedOffset::west_opt(7 * 3600).unwrap()
}
