//! Runtime configuration for the watch.
//!
//! Every field has a default, so a config source only needs to name the
//! values it changes.

use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

/// Frame rate used when nothing else is configured.
pub const DEFAULT_FRAME_RATE: u32 = 30;

/// Fade progress added per frame.
pub const DEFAULT_FADE_STEP: f32 = 0.05;

/// Highest frame rate accepted by [`WatchConfig::validate`].
pub const MAX_FRAME_RATE: u32 = 240;

/// What happens to the entrance fade when the screen changes.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FadePolicy {
    /// Restart the fade from zero on every screen change.
    #[default]
    ResetOnTransition,
    /// Fade in once at startup and stay fully faded in afterwards.
    SingleShot,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct WatchConfig {
    /// Target frames per second of the frame loop
    pub frame_rate: u32,
    /// Fade progress added per frame, in (0, 1]
    pub fade_step: f32,
    pub fade_policy: FadePolicy,
    /// Initial clock format
    pub clock_24h: bool,
    /// Initial WiFi state
    pub wifi_enabled: bool,
    /// Integer scale of the simulator window
    pub window_scale: u32,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            fade_step: DEFAULT_FADE_STEP,
            fade_policy: FadePolicy::default(),
            clock_24h: false,
            wifi_enabled: true,
            window_scale: 1,
        }
    }
}

impl WatchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_rate == 0 || self.frame_rate > MAX_FRAME_RATE {
            return Err(ConfigError::FrameRate {
                value: self.frame_rate,
                max: MAX_FRAME_RATE,
            });
        }
        if !(self.fade_step > 0.0 && self.fade_step <= 1.0) {
            return Err(ConfigError::FadeStep {
                value: self.fade_step,
            });
        }
        if self.window_scale == 0 {
            return Err(ConfigError::WindowScale);
        }
        Ok(())
    }

    /// Length of one frame in microseconds.
    pub fn frame_duration_micros(&self) -> u64 {
        1_000_000 / u64::from(self.frame_rate.max(1))
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("frame rate {value} is out of range (1..={max})")]
    FrameRate { value: u32, max: u32 },
    #[error("fade step {value} is out of range (0, 1]")]
    FadeStep { value: f32 },
    #[error("window scale must be at least 1")]
    WindowScale,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = WatchConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.frame_duration_micros(), 33_333);
        assert!(config.wifi_enabled);
        assert!(!config.clock_24h);
        assert_eq!(config.fade_policy, FadePolicy::ResetOnTransition);
    }

    #[test]
    fn test_rejects_zero_frame_rate() {
        let config = WatchConfig {
            frame_rate: 0,
            ..WatchConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::FrameRate {
                value: 0,
                max: MAX_FRAME_RATE
            })
        );
    }

    #[test]
    fn test_rejects_bad_fade_step() {
        for step in [0.0, -0.5, 1.5, f32::NAN] {
            let config = WatchConfig {
                fade_step: step,
                ..WatchConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::FadeStep { .. })
            ));
        }

        let full_step = WatchConfig {
            fade_step: 1.0,
            ..WatchConfig::default()
        };
        assert_eq!(full_step.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_window_scale() {
        let config = WatchConfig {
            window_scale: 0,
            ..WatchConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::WindowScale));
    }
}
