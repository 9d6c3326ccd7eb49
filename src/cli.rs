//! Command-line helpers shared by the binaries.

use std::process;

use clap::error::ErrorKind;
use clap::Parser;

/// Exit status for usage errors and fatal setup diagnostics
pub const EXIT_FAILURE: i32 = 1;

/// Parse the process arguments, printing `usage` and exiting with status 1
/// when they are incomplete. `--help` and `--version` keep clap's behavior.
pub fn parse_or_exit<P: Parser>(usage: &str) -> P {
    match P::try_parse() {
        Ok(args) => args,
        Err(err) if is_informational(&err) => err.exit(),
        Err(err) => {
            eprint!("{}", err.render());
            eprintln!("{}", usage);
            process::exit(EXIT_FAILURE);
        }
    }
}

/// True for clap "errors" that are really help or version output
pub fn is_informational(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}

/// Interpret a `true|false` option value; anything but a case-insensitive
/// `true` counts as false.
pub fn parse_flag_value(value: &str) -> Result<bool, String> {
    Ok(value.trim().eq_ignore_ascii_case("true"))
}
