use crate::LABEL;
use std::ffi::OsStr;
use std::io::{self, Write};

/// Write the address line, `SIP address is:  <ip>`, followed by a newline.
///
/// The label and the value are separated by a single space, and the label
/// itself ends in one, hence the double space. The value is written as raw
/// bytes where the platform allows it.
pub fn write_address<W: Write>(writer: &mut W, ip: &OsStr) -> io::Result<()> {
    writer.write_all(LABEL.as_bytes())?;
    writer.write_all(b" ")?;
    write_raw(writer, ip)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

#[cfg(unix)]
fn write_raw<W: Write>(writer: &mut W, value: &OsStr) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;
    writer.write_all(value.as_bytes())
}

#[cfg(not(unix))]
fn write_raw<W: Write>(writer: &mut W, value: &OsStr) -> io::Result<()> {
    writer.write_all(value.to_string_lossy().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(ip: &str) -> String {
        let mut buf = Vec::new();
        write_address(&mut buf, OsStr::new(ip)).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn default_address_line() {
        assert_eq!(render(crate::DEFAULT_IP), "SIP address is:  127.0.0.1\n");
    }

    #[test]
    fn empty_value_keeps_label() {
        assert_eq!(render(""), "SIP address is:  \n");
    }

    #[test]
    fn value_is_not_validated() {
        assert_eq!(render("notanip"), "SIP address is:  notanip\n");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_value_is_written_verbatim() {
        use std::os::unix::ffi::OsStrExt;

        let mut buf = Vec::new();
        write_address(&mut buf, OsStr::from_bytes(b"10.0.0.\xff")).unwrap();
        assert_eq!(buf, b"SIP address is:  10.0.0.\xff\n");
    }
}
