//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Read and set display backlight brightness
#[derive(Parser, Debug, Default)]
#[command(name = "backlightctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the backlight to use, same name as in /sys/class/backlight
    #[arg(short = 'p', long = "device", value_name = "NAME")]
    pub device: Option<String>,

    /// Target brightness in percent; only report when omitted
    #[arg(value_name = "PERCENT", allow_negative_numbers = true)]
    pub percent: Option<String>,

    /// List available backlights and exit
    #[arg(short, long, conflicts_with_all = ["device", "percent"])]
    pub list: bool,

    /// Config file (default: $XDG_CONFIG_HOME/backlightctl/backlightctl.toml)
    #[arg(long, env = "BACKLIGHTCTL_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Debug output, repeat for more (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL", exclusive = true)]
    pub completions: Option<clap_complete::Shell>,
}
