//! CLI context - one invocation from parsed flags to printed or copied password.

use std::io::Write;

use copypasta::{ClipboardContext, ClipboardProvider};
use log::{debug, warn};
use zeroize::Zeroize;

use super::{CliFlags, Error, prompts, quiet};
use crate::pass::{self, Password, ValidatedConfig};
use crate::rng::RngSource;

pub struct Context {
    flags: CliFlags,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        Self { flags }
    }

    /// Validate, build, emit. Nothing is printed or copied unless every step succeeds.
    pub fn run(&self) -> Result<(), Error> {
        quiet::set(self.flags.quiet);

        let config = self.config()?;
        let password = pass::build(&config, &mut RngSource::thread())?;

        let stdout = std::io::stdout();
        self.emit(&password, &mut stdout.lock())
    }

    fn config(&self) -> Result<ValidatedConfig, Error> {
        Ok(pass::validate(&self.flags.request())?)
    }

    fn emit<W: Write>(&self, password: &Password, out: &mut W) -> Result<(), Error> {
        if self.flags.copy_to_clipboard {
            match ClipboardContext::new() {
                Ok(mut ctx) => {
                    debug!("output route: clipboard");
                    return copy(&mut ctx, password);
                }
                Err(e) => {
                    warn!("clipboard unavailable: {e}");
                    if !prompts::clipboard_fallback(&e.to_string()) {
                        debug!("clipboard fallback declined");
                        return Ok(());
                    }
                }
            }
        }
        debug!("output route: terminal");
        print(password, out)
    }
}

fn print<W: Write>(password: &Password, out: &mut W) -> Result<(), Error> {
    let mut line = Vec::with_capacity(password.len() + 1);
    line.extend_from_slice(password.as_str().as_bytes());
    line.push(b'\n');
    let written = out.write_all(&line).and_then(|_| out.flush());
    line.zeroize();
    written?;
    Ok(())
}

fn copy<C: ClipboardProvider>(ctx: &mut C, password: &Password) -> Result<(), Error> {
    ctx.set_contents(password.as_str().to_owned())
        .map_err(|e| Error::Clipboard(e.to_string()))?;
    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    prompts::clipboard_copied();
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::error::Error as StdError;

    use super::*;
    use crate::pass::{CharacterClass, ValidatedConfig, build};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    type BoxErr = Box<dyn StdError + Send + Sync + 'static>;

    #[derive(Default)]
    struct MemoryClipboard {
        contents: Option<String>,
        broken: bool,
    }

    impl ClipboardProvider for MemoryClipboard {
        fn get_contents(&mut self) -> Result<String, BoxErr> {
            self.contents.clone().ok_or_else(|| "empty".into())
        }

        fn set_contents(&mut self, contents: String) -> Result<(), BoxErr> {
            if self.broken {
                return Err("no display".into());
            }
            self.contents = Some(contents);
            Ok(())
        }
    }

    fn password() -> Password {
        let config = ValidatedConfig::new(&CharacterClass::ALL, 12);
        build(&config, &mut RngSource::new(StdRng::seed_from_u64(11))).unwrap()
    }

    #[test]
    fn print_writes_password_line() {
        let password = password();
        let mut out = Vec::new();
        print(&password, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", password.as_str()));
    }

    #[test]
    fn copy_places_password_on_clipboard() {
        quiet::set(true);
        let password = password();
        let mut clipboard = MemoryClipboard::default();
        copy(&mut clipboard, &password).unwrap();
        assert_eq!(clipboard.contents.as_deref(), Some(password.as_str()));
    }

    #[test]
    fn copy_failure_is_reported() {
        let password = password();
        let mut clipboard = MemoryClipboard {
            broken: true,
            ..Default::default()
        };
        match copy(&mut clipboard, &password) {
            Err(Error::Clipboard(msg)) => assert_eq!(msg, "no display"),
            other => panic!("unexpected {other:?}"),
        }
        assert!(clipboard.contents.is_none());
    }

    #[test]
    fn emit_to_terminal_when_not_copying() {
        let flags = CliFlags {
            length: 16,
            all: false,
            letters: false,
            digits: true,
            special_chars: false,
            copy_to_clipboard: false,
            quiet: true,
        };
        let ctx = Context::new(flags);
        let config = ctx.config().unwrap();
        let password = build(&config, &mut RngSource::new(StdRng::seed_from_u64(5))).unwrap();

        let mut out = Vec::new();
        ctx.emit(&password, &mut out).unwrap();
        let line = String::from_utf8(out).unwrap();
        assert_eq!(line.trim_end().len(), 16);
        assert!(line.trim_end().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn invalid_request_fails_before_output() {
        let flags = CliFlags {
            length: 4,
            all: false,
            letters: false,
            digits: false,
            special_chars: false,
            copy_to_clipboard: false,
            quiet: true,
        };
        match Context::new(flags).run() {
            Err(Error::Config(pass::ConfigError::LengthTooShort(4))) => {}
            other => panic!("unexpected {other:?}"),
        }
    }
}
