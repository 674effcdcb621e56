pub mod commands;

pub use commands::dispatch::{Dispatch, DispatchError, dispatch};
pub use commands::dump::dump_config;
pub use commands::prepare::{Prepared, prepare};

/// Exit status for an invalid command line (anything but exactly one URL)
///
/// Windows `ERROR_INVALID_COMMAND_LINE`. Unix reports only the low byte (0x67).
pub const EXIT_INVALID_COMMAND_LINE: i32 = 0x667;
