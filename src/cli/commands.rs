//! Command dispatch: device selection, reporting and setting brightness

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, info, instrument};

use crate::application::services::find_device;
use crate::cli::args::Cli;
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::Settings;
use crate::domain::Brightness;
use crate::infrastructure::di::ServiceContainer;

/// What one invocation read and, if a target was given, wrote.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// `--list`: available device names
    Listed(Vec<String>),
    /// Brightness was reported, and optionally changed
    Brightness {
        current: Brightness,
        set: Option<Brightness>,
    },
}

/// Entry point used by `main`: load settings, run against stdout.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if let Some(shell) = cli.completions {
        print_completions(shell);
        return Ok(());
    }

    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);
    let container = ServiceContainer::new(settings);

    run(cli, &container, &mut io::stdout().lock())?;
    Ok(())
}

/// Run one invocation against the services in `container`.
///
/// Report lines go to `out` as soon as they are known, so the current
/// brightness is shown even when parsing the target or writing it fails.
/// Nothing is written to the device unless it exists, both of its
/// brightness files were read, and the target percentage parsed.
#[instrument(skip(container, out))]
pub fn run(cli: &Cli, container: &ServiceContainer, out: &mut impl Write) -> CliResult<Outcome> {
    let backlight = container.backlight();
    let devices = backlight.list_devices()?;

    if cli.list {
        for device in &devices {
            output::line(out, device)?;
        }
        return Ok(Outcome::Listed(devices));
    }

    let device = match cli.device.as_deref() {
        Some(device) => device,
        None => {
            return Err(CliError::MissingDevice {
                usage: Cli::command().render_help().to_string(),
                available: devices,
            })
        }
    };
    find_device(&devices, device)?;

    let current = backlight.read(device)?;
    info!(
        "{}: {}/{} ({:.1}%)",
        device,
        current.current(),
        current.max(),
        current.percent()
    );
    output::line(out, &output::current_line(&current))?;

    let target = match cli.percent.as_deref() {
        Some(arg) => parse_percent(arg)?,
        None => return Ok(Outcome::Brightness { current, set: None }),
    };

    let percent = container.settings.percent_policy.apply(target)?;
    let updated = current.with_percent(percent);
    backlight.write(device, &updated)?;
    info!("{}: set to {}", device, updated.current());
    output::line(out, &output::set_line(&updated))?;

    Ok(Outcome::Brightness {
        current,
        set: Some(updated),
    })
}

fn parse_percent(arg: &str) -> CliResult<f64> {
    let invalid = |reason: String| CliError::InvalidPercent {
        arg: arg.to_string(),
        reason,
    };
    let value: f64 = arg.trim().parse().map_err(|e| invalid(format!("{e}")))?;
    if !value.is_finite() {
        return Err(invalid("not a finite number".to_string()));
    }
    Ok(value)
}

fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
