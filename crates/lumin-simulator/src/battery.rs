//! Host battery level from the Linux power-supply class.
//!
//! Hosts without `/sys/class/power_supply`, or without a supply of type
//! `Battery`, report no battery and the status bar falls back to time only.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::debug;

/// Default sysfs directory listing the power supplies.
pub const POWER_SUPPLY_DIR: &str = "/sys/class/power_supply";

/// How long a reading stays valid.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Charge of the first battery under `dir`, in percent.
pub fn read_battery_percent(dir: &Path) -> Option<u8> {
    let mut supplies: Vec<PathBuf> = fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    supplies.sort();

    supplies.iter().find_map(|supply| {
        let kind = fs::read_to_string(supply.join("type")).ok()?;
        if kind.trim() != "Battery" {
            return None;
        }
        let capacity = fs::read_to_string(supply.join("capacity")).ok()?;
        let percent: u8 = capacity.trim().parse().ok()?;
        Some(percent.min(100))
    })
}

/// Cached battery reader, refreshed at most every [`REFRESH_INTERVAL`].
pub struct BatteryMonitor {
    dir: PathBuf,
    last_read: Option<Instant>,
    percent: Option<u8>,
}

impl BatteryMonitor {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            last_read: None,
            percent: None,
        }
    }

    pub fn system() -> Self {
        Self::new(POWER_SUPPLY_DIR)
    }

    /// Current reading, re-reading sysfs when the cached one is stale.
    pub fn percent(&mut self, now: Instant) -> Option<u8> {
        let stale = self
            .last_read
            .is_none_or(|last| now.duration_since(last) >= REFRESH_INTERVAL);
        if stale {
            self.percent = read_battery_percent(&self.dir);
            self.last_read = Some(now);
            debug!("Battery: {:?}", self.percent);
        }
        self.percent
    }
}
