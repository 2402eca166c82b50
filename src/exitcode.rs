//! Standard exit codes (BSD sysexits.h compatible)

/// Command line usage error (no device selected)
pub const USAGE: i32 = 64;

/// Data format error (unparseable percentage or brightness file)
pub const DATAERR: i32 = 65;

/// Cannot open input (no such backlight)
pub const NOINPUT: i32 = 66;

/// Internal software error
pub const SOFTWARE: i32 = 70;

/// Input/output error
pub const IOERR: i32 = 74;

/// Permission denied
pub const NOPERM: i32 = 77;

/// Configuration error
pub const CONFIG: i32 = 78;
