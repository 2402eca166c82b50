//! Backlight device service
//!
//! Enumerates backlight devices and reads/writes their raw brightness files.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::Brightness;
use crate::infrastructure::traits::FileSystem;

/// Per-device file holding the current raw brightness (read/write).
pub const BRIGHTNESS_FILE: &str = "brightness";
/// Per-device file holding the maximum raw brightness (read-only).
pub const MAX_BRIGHTNESS_FILE: &str = "max_brightness";

/// Service for one backlight class directory, e.g. `/sys/class/backlight`.
pub struct BacklightService {
    fs: Arc<dyn FileSystem>,
    backlight_dir: PathBuf,
}

impl BacklightService {
    /// Create a new backlight service rooted at `backlight_dir`.
    pub fn new(fs: Arc<dyn FileSystem>, backlight_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            backlight_dir: backlight_dir.into(),
        }
    }

    /// List available device names, sorted.
    ///
    /// Fails with `NoDevices` if the directory is empty.
    #[instrument(skip(self), fields(dir = %self.backlight_dir.display()))]
    pub fn list_devices(&self) -> ApplicationResult<Vec<String>> {
        let mut devices = self
            .fs
            .read_dir_names(&self.backlight_dir)
            .with_path_context("read", &self.backlight_dir)?;

        if devices.is_empty() {
            return Err(ApplicationError::NoDevices {
                dir: self.backlight_dir.clone(),
            });
        }
        devices.sort();
        debug!("list_devices: found {}", devices.join(" "));
        Ok(devices)
    }

    /// Read current and maximum brightness of `device`.
    #[instrument(skip(self))]
    pub fn read(&self, device: &str) -> ApplicationResult<Brightness> {
        let current = self.read_int(&self.device_file(device, BRIGHTNESS_FILE))?;
        let max = self.read_int(&self.device_file(device, MAX_BRIGHTNESS_FILE))?;
        debug!("read: current={} max={}", current, max);
        Ok(Brightness::new(current, max)?)
    }

    /// Write the raw current value of `brightness` to `device`.
    ///
    /// The file is truncated and receives the decimal value without a
    /// trailing newline.
    #[instrument(skip(self))]
    pub fn write(&self, device: &str, brightness: &Brightness) -> ApplicationResult<()> {
        let path = self.device_file(device, BRIGHTNESS_FILE);
        self.fs
            .write(&path, &brightness.current().to_string())
            .with_path_context("write", &path)?;
        debug!("write: {} <- {}", path.display(), brightness.current());
        Ok(())
    }

    fn device_file(&self, device: &str, file: &str) -> PathBuf {
        self.backlight_dir.join(device).join(file)
    }

    fn read_int(&self, path: &Path) -> ApplicationResult<i64> {
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read", path)?;
        content
            .trim()
            .parse::<i64>()
            .map_err(|source| ApplicationError::Parse {
                path: path.to_path_buf(),
                content,
                source,
            })
    }
}

/// Check that `requested` is one of `devices`.
///
/// `devices` must be sorted, as returned by [`BacklightService::list_devices`].
pub fn find_device(devices: &[String], requested: &str) -> ApplicationResult<()> {
    devices
        .binary_search_by(|d| d.as_str().cmp(requested))
        .map(|_| ())
        .map_err(|_| ApplicationError::UnknownDevice {
            name: requested.to_string(),
            available: devices.to_vec(),
        })
}
