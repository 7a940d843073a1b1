use common::{normalize_args, DEFAULT_IP};
use std::ffi::OsString;

#[derive(clap::Parser, Debug)]
#[command(name = "sip-address", about = "Prints the SIP address it is given")]
pub struct Args {
    /// a IP address
    #[arg(long = "ip", value_name = "string", default_value = DEFAULT_IP, allow_hyphen_values = true)]
    pub ip: OsString,
    /// Operands after `--`; never used
    #[arg(hide = true)]
    pub operands: Vec<OsString>,
}

impl Args {
    /// Parse the process arguments, exiting with a usage error on failure.
    pub fn from_env() -> Self {
        <Self as clap::Parser>::parse_from(normalize_args(std::env::args_os()))
    }
}
