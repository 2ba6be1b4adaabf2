// verso-cli: shared utilities for CLI tools.

use std::io::{self, Read};
use std::process;

use verso_es::forms::PoemForm;

/// Environment variable naming the default poem form for `verso-meter`.
pub const FORM_ENV: &str = "VERSO_FORM";

/// Initialize logging from `RUST_LOG`, defaulting to warnings only.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Parse a `--form=NAME` or `-f NAME` argument from command line args.
///
/// Falls back to the `VERSO_FORM` environment variable when no flag is
/// given. Returns `(form, remaining_args)`.
pub fn parse_form(args: &[String]) -> Result<(Option<PoemForm>, Vec<String>), String> {
    let mut name = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--form=") {
            name = Some(val.to_string());
        } else if arg == "--form" || arg == "-f" {
            match args.get(i + 1) {
                Some(val) => {
                    name = Some(val.clone());
                    skip_next = true;
                }
                None => return Err(format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    if name.is_none() {
        if let Ok(env_name) = std::env::var(FORM_ENV) {
            log::debug!("using form {env_name:?} from {FORM_ENV}");
            name = Some(env_name);
        }
    }

    let form = match name {
        Some(n) => Some(n.parse::<PoemForm>().map_err(|e| {
            let known: Vec<&str> = PoemForm::ALL.iter().map(|f| f.id()).collect();
            format!("{e} (known forms: {})", known.join(", "))
        })?),
        None => None,
    };

    Ok((form, remaining))
}

/// Read all of stdin into a string.
pub fn read_stdin() -> Result<String, String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| format!("failed to read stdin: {e}"))?;
    Ok(input)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Check if a boolean flag is present in the args.
pub fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}
