// Copyright 2021 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the MIT License.

//! A very simple logger.
//!
//! Status reporting goes to standard output, problems go to standard error,
//! and everything gets a little colored prefix. Loosely derived from the
//! logger in ripgrep.

use lazy_static::lazy_static;
use log::{Level, Log};
use std::{
    io::{self, Write},
    sync::RwLock,
};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// A simple logger.
pub struct Logger {
    inner: RwLock<InnerLogger>,
    info_cspec: ColorSpec,
    warn_cspec: ColorSpec,
    error_cspec: ColorSpec,
}

struct InnerLogger {
    stdout: StandardStream,
    stderr: StandardStream,
}

lazy_static! {
    static ref LOGGER: Logger = {
        let stdout = StandardStream::stdout(ColorChoice::Auto);
        let stderr = StandardStream::stderr(ColorChoice::Auto);
        let mut info_cspec = ColorSpec::new();
        let mut warn_cspec = ColorSpec::new();
        let mut error_cspec = ColorSpec::new();

        info_cspec.set_fg(Some(Color::Green)).set_bold(true);
        warn_cspec.set_fg(Some(Color::Yellow)).set_bold(true);
        error_cspec.set_fg(Some(Color::Red)).set_bold(true);

        Logger {
            inner: RwLock::new(InnerLogger { stdout, stderr }),
            info_cspec,
            warn_cspec,
            error_cspec,
        }
    };
}

impl Logger {
    /// Set up this type as the global static logger.
    pub fn init() -> Result<(), log::SetLoggerError> {
        log::set_logger(&*LOGGER)
    }

    /// Report one cause in an error's chain, in the same visual style as the
    /// `log` records. Used when unspooling an `anyhow` context chain at the
    /// top level.
    pub fn print_cause(err: &(dyn std::error::Error + 'static)) {
        if let Ok(mut inner) = LOGGER.inner.write() {
            let _r = inner.stderr.set_color(&LOGGER.error_cspec);
            let _r = write!(&mut inner.stderr, "caused by:");
            let _r = inner.stderr.reset();
            let _r = writeln!(&mut inner.stderr, " {}", err);
        }
    }
}

impl Log for Logger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        // Rely on `log::set_max_level()` for filtering
        true
    }

    fn log(&self, record: &log::Record) {
        if let Ok(mut inner) = self.inner.write() {
            match record.level() {
                Level::Trace | Level::Debug => {
                    let _r = writeln!(&mut inner.stderr, "{}", record.args());
                }

                Level::Info => {
                    let _r = inner.stdout.set_color(&self.info_cspec);
                    let _r = write!(&mut inner.stdout, "info:");
                    let _r = inner.stdout.reset();
                    let _r = writeln!(&mut inner.stdout, " {}", record.args());
                }

                Level::Warn => {
                    let _r = inner.stderr.set_color(&self.warn_cspec);
                    let _r = write!(&mut inner.stderr, "warning:");
                    let _r = inner.stderr.reset();
                    let _r = writeln!(&mut inner.stderr, " {}", record.args());
                }

                Level::Error => {
                    let _r = inner.stderr.set_color(&self.error_cspec);
                    let _r = write!(&mut inner.stderr, "error:");
                    let _r = inner.stderr.reset();
                    let _r = writeln!(&mut inner.stderr, " {}", record.args());
                }
            }
        }
    }

    fn flush(&self) {
        let _r = io::stdout().flush();
    }
}
