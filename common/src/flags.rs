use crate::VALUE_FLAGS;
use std::ffi::OsString;

/// Rewrite raw process arguments into the spelling clap expects.
///
/// Options may be written with one or two dashes. Multi-character names
/// become `--name` and single-character names become `-n`, so `-ip
/// 10.0.0.5`, `-ip=10.0.0.5` and `--h` turn into `--ip 10.0.0.5`,
/// `--ip=10.0.0.5` and `-h`. Option parsing stops at `--` or at the first
/// operand; a `--` is inserted before that operand so everything after it
/// is left alone. The value following a value-taking option is passed
/// through untouched, even when it starts with `-` or is not UTF-8.
///
/// Tokens with an empty name or more than two dashes are malformed and are
/// kept as typed for the parser to reject.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut out = Vec::new();

    // program name
    if let Some(bin) = args.next() {
        out.push(bin);
    }

    while let Some(arg) = args.next() {
        let text = arg.to_string_lossy().into_owned();

        if text == "--" {
            out.push(arg);
            break;
        }

        if text == "-" || !text.starts_with('-') {
            out.push("--".into());
            out.push(arg);
            break;
        }

        let dashes = text.len() - text.trim_start_matches('-').len();
        let body = &text[dashes..];
        let (name, attached) = match body.split_once('=') {
            Some((name, _)) => (name, true),
            None => (body, false),
        };
        let takes_value = !attached && VALUE_FLAGS.contains(&name);
        let prefix = if name.chars().count() == 1 { "-" } else { "--" };

        if dashes > 2 || name.is_empty() {
            out.push(arg);
        } else if arg.to_str().is_some() {
            out.push(format!("{}{}", prefix, body).into());
        } else if dashes == 1 && prefix == "--" {
            // non-UTF-8 attached value, keep its bytes
            let mut long = OsString::from("-");
            long.push(&arg);
            out.push(long);
        } else {
            out.push(arg);
        }

        if takes_value {
            match args.next() {
                Some(value) => out.push(value),
                None => break,
            }
        }
    }

    out.extend(args);
    out
}
