//! End-to-end tests for the command flow (`cli::commands::run`)

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use backlightctl::application::ApplicationError;
use backlightctl::cli::commands::{run, Outcome};
use backlightctl::cli::{Cli, CliError};
use backlightctl::config::Settings;
use backlightctl::domain::{DomainError, PercentPolicy};
use backlightctl::exitcode;
use backlightctl::infrastructure::di::ServiceContainer;
use backlightctl::infrastructure::traits::{FileSystem, RealFileSystem};
use backlightctl::util::testing;

/// Real filesystem that records every file read and write.
#[derive(Default)]
struct RecordingFs {
    inner: RealFileSystem,
    reads: Mutex<Vec<PathBuf>>,
    writes: Mutex<Vec<PathBuf>>,
    deny_writes: bool,
}

impl FileSystem for RecordingFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.reads.lock().unwrap().push(path.to_path_buf());
        self.inner.read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        self.writes.lock().unwrap().push(path.to_path_buf());
        if self.deny_writes {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "Permission denied",
            ));
        }
        self.inner.write(path, content)
    }

    fn read_dir_names(&self, path: &Path) -> io::Result<Vec<String>> {
        self.inner.read_dir_names(path)
    }
}

struct Fixture {
    temp: TempDir,
    fs: Arc<RecordingFs>,
}

impl Fixture {
    /// Fake backlight class dir with `acpi_video0` and `intel_backlight` (50/100).
    fn new() -> Self {
        Self::with_fs(RecordingFs::default())
    }

    fn with_fs(fs: RecordingFs) -> Self {
        testing::init_test_setup();
        let temp = TempDir::new().unwrap();
        let devices = [
            ("acpi_video0", "7\n", "15\n"),
            ("intel_backlight", "50\n", "100\n"),
        ];
        for (name, current, max) in devices {
            let dir = temp.path().join(name);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("brightness"), current).unwrap();
            fs::write(dir.join("max_brightness"), max).unwrap();
        }
        Self {
            temp,
            fs: Arc::new(fs),
        }
    }

    fn container(&self, percent_policy: PercentPolicy) -> ServiceContainer {
        let settings = Settings {
            backlight_dir: self.temp.path().to_path_buf(),
            percent_policy,
        };
        ServiceContainer::with_deps(settings, self.fs.clone())
    }

    /// Run with the default policy; returns the result and everything reported on stdout.
    fn run(
        &self,
        device: Option<&str>,
        percent: Option<&str>,
    ) -> (Result<Outcome, CliError>, String) {
        let cli = Cli {
            device: device.map(String::from),
            percent: percent.map(String::from),
            ..Default::default()
        };
        self.run_cli(&cli, PercentPolicy::Passthrough)
    }

    fn run_cli(&self, cli: &Cli, policy: PercentPolicy) -> (Result<Outcome, CliError>, String) {
        let mut out = Vec::new();
        let result = run(cli, &self.container(policy), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    fn brightness_file(&self, device: &str) -> String {
        fs::read_to_string(self.temp.path().join(device).join("brightness")).unwrap()
    }

    fn reads(&self) -> usize {
        self.fs.reads.lock().unwrap().len()
    }

    fn writes(&self) -> usize {
        self.fs.writes.lock().unwrap().len()
    }
}

#[test]
fn given_device_without_percent_when_running_then_reports_only() {
    let fx = Fixture::new();

    let (result, stdout) = fx.run(Some("intel_backlight"), None);

    match result.unwrap() {
        Outcome::Brightness { current, set } => {
            assert_eq!(current.percent(), 50.0);
            assert!(set.is_none());
        }
        other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(stdout, "Current brightness is 50%\n");
    assert_eq!(fx.writes(), 0);
    assert_eq!(fx.brightness_file("intel_backlight"), "50\n");
}

#[test]
fn given_percent_75_when_running_then_writes_raw_75() {
    let fx = Fixture::new();

    let (result, stdout) = fx.run(Some("intel_backlight"), Some("75"));

    match result.unwrap() {
        Outcome::Brightness { current, set } => {
            assert_eq!(current.current(), 50);
            let set = set.expect("brightness was set");
            assert_eq!(set.current(), 75);
            assert_eq!(set.percent(), 75.0);
        }
        other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(
        stdout,
        "Current brightness is 50%\nSet brightness to 75%\n"
    );
    assert_eq!(fx.brightness_file("intel_backlight"), "75");
    // the other device is untouched
    assert_eq!(fx.brightness_file("acpi_video0"), "7\n");
}

#[test]
fn given_non_numeric_percent_when_running_then_reports_current_and_never_writes() {
    let fx = Fixture::new();

    let (result, stdout) = fx.run(Some("intel_backlight"), Some("abc"));
    let err = result.unwrap_err();

    assert!(matches!(err, CliError::InvalidPercent { .. }), "{err:?}");
    assert_eq!(err.exit_code(), exitcode::DATAERR);
    assert_eq!(stdout, "Current brightness is 50%\n");
    assert_eq!(fx.writes(), 0);
    assert_eq!(fx.brightness_file("intel_backlight"), "50\n");
}

#[test]
fn given_no_device_when_running_then_help_with_device_list() {
    let fx = Fixture::new();

    let (result, stdout) = fx.run(None, Some("75"));
    let err = result.unwrap_err();

    match &err {
        CliError::MissingDevice { usage, available } => {
            assert!(usage.contains("Usage: backlightctl"), "{usage}");
            assert!(usage.contains("--device <NAME>"), "{usage}");
            assert_eq!(available, &vec!["acpi_video0", "intel_backlight"]);
        }
        other => panic!("expected MissingDevice, got {other:?}"),
    }
    assert_ne!(err.exit_code(), 0);
    assert!(stdout.is_empty());
    assert_eq!(fx.reads(), 0);
    assert_eq!(fx.writes(), 0);
}

#[test]
fn given_unknown_device_when_running_then_not_found_without_io() {
    let fx = Fixture::new();

    let (result, stdout) = fx.run(Some("nonexistent"), Some("10"));
    let err = result.unwrap_err();

    match &err {
        CliError::Application(ApplicationError::UnknownDevice { available, .. }) => {
            assert_eq!(available, &vec!["acpi_video0", "intel_backlight"]);
        }
        other => panic!("expected UnknownDevice, got {other:?}"),
    }
    assert_eq!(err.exit_code(), exitcode::NOINPUT);
    assert!(stdout.is_empty());
    assert_eq!(fx.reads(), 0);
    assert_eq!(fx.writes(), 0);
}

#[test]
fn given_list_flag_when_running_then_lists_devices() {
    let fx = Fixture::new();
    let cli = Cli {
        list: true,
        ..Default::default()
    };

    let (result, stdout) = fx.run_cli(&cli, PercentPolicy::Passthrough);

    assert_eq!(
        result.unwrap(),
        Outcome::Listed(vec!["acpi_video0".into(), "intel_backlight".into()])
    );
    assert_eq!(stdout, "acpi_video0\nintel_backlight\n");
}

#[test]
fn given_denied_write_when_running_then_noperm_after_reporting_current() {
    let fx = Fixture::with_fs(RecordingFs {
        deny_writes: true,
        ..Default::default()
    });

    let (result, stdout) = fx.run(Some("intel_backlight"), Some("20"));
    let err = result.unwrap_err();

    assert!(
        matches!(err, CliError::Application(ApplicationError::Io { .. })),
        "{err:?}"
    );
    assert_eq!(err.exit_code(), exitcode::NOPERM);
    assert!(err.to_string().contains("intel_backlight/brightness"));
    assert_eq!(stdout, "Current brightness is 50%\n");
    assert_eq!(fx.brightness_file("intel_backlight"), "50\n");
}

#[test]
fn given_out_of_range_percent_when_passthrough_then_raw_value_exceeds_max() {
    let fx = Fixture::new();

    let (result, _) = fx.run(Some("intel_backlight"), Some("150"));

    result.unwrap();
    assert_eq!(fx.brightness_file("intel_backlight"), "150");
}

#[test]
fn given_out_of_range_percent_when_clamp_then_writes_max() {
    let fx = Fixture::new();
    let cli = Cli {
        device: Some("acpi_video0".into()),
        percent: Some("150".into()),
        ..Default::default()
    };

    let (result, stdout) = fx.run_cli(&cli, PercentPolicy::Clamp);

    result.unwrap();
    assert_eq!(fx.brightness_file("acpi_video0"), "15");
    assert!(stdout.ends_with("Set brightness to 100%\n"), "{stdout}");
}

#[test]
fn given_out_of_range_percent_when_reject_then_fails_without_write() {
    let fx = Fixture::new();
    let cli = Cli {
        device: Some("acpi_video0".into()),
        percent: Some("-5".into()),
        ..Default::default()
    };

    let (result, _) = fx.run_cli(&cli, PercentPolicy::Reject);
    let err = result.unwrap_err();

    assert!(
        matches!(
            err,
            CliError::Application(ApplicationError::Domain(DomainError::PercentOutOfRange(_)))
        ),
        "{err:?}"
    );
    assert_eq!(fx.writes(), 0);
}

#[test]
fn given_empty_backlight_dir_when_running_then_no_devices() {
    testing::init_test_setup();
    let temp = TempDir::new().unwrap();
    let settings = Settings {
        backlight_dir: temp.path().to_path_buf(),
        ..Default::default()
    };
    let container = ServiceContainer::with_deps(settings, Arc::new(RealFileSystem));
    let cli = Cli {
        device: Some("intel_backlight".into()),
        ..Default::default()
    };

    let err = run(&cli, &container, &mut Vec::new()).unwrap_err();

    assert!(
        matches!(err, CliError::Application(ApplicationError::NoDevices { .. })),
        "{err:?}"
    );
    assert_eq!(err.exit_code(), exitcode::NOINPUT);
}
