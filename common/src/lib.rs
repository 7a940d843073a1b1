pub use flags::normalize_args;
pub use output::write_address;
mod flags;
mod output;

pub static DEFAULT_IP: &str = "127.0.0.1";
pub static LABEL: &str = "SIP address is: ";

/// Long options that consume the following token as their value.
pub static VALUE_FLAGS: &[&str] = &["ip"];
