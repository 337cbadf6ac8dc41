// Copyright 2021 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the MIT License.

//! The main verstamp command-line interface.
//!
//! This tool searches the specified directory and its subdirectories for
//! `AssemblyInfo.cs` files and modifies their versioning attributes with the
//! specified values, appending any attributes that are missing.

use anyhow::anyhow;
use log::{error, info};
use std::{fs, path::PathBuf};
use structopt::StructOpt;

mod app;
mod errors;
mod locate;
mod logger;
mod rewrite;
mod version;

use errors::Result;

/// "Annotated try": like the `?` operator, but requiring a message that
/// adds context to any error.
///
/// ```ignore
/// let f = atry!(
///     File::open(&path);
///     ["failed to open file `{}`", path.display()]
/// );
/// ```
#[macro_export]
macro_rules! atry {
    ($op:expr ; [$($inner:tt)+]) => {{
        use anyhow::Context;
        $op.with_context(|| format!($($inner)+))?
    }};
}

/// Like [`atry!`], but for extracting values out of Options rather than
/// Results.
#[macro_export]
macro_rules! a_ok_or {
    ($op:expr ; [$($inner:tt)+]) => {
        $op.ok_or_else(|| anyhow::anyhow!($($inner)+))?
    };
}

#[derive(Debug, PartialEq, StructOpt)]
#[structopt(name = "verstamp", about = "stamp version metadata into AssemblyInfo.cs files")]
struct VerstampOptions {
    #[structopt(
        help = "Path to the directory containing the source code",
        parse(from_os_str)
    )]
    source_dir: PathBuf,

    #[structopt(
        long = "version-string",
        help = "The version to stamp in, as `major.minor.build.revision`"
    )]
    version_string: Option<String>,

    #[structopt(
        long = "version-file",
        help = "A file containing the version to stamp in",
        parse(from_os_str)
    )]
    version_file: Option<PathBuf>,

    #[structopt(
        long = "info-string",
        help = "The human-friendly version label to stamp in"
    )]
    info_string: Option<String>,

    #[structopt(
        long = "info-file",
        help = "A file containing the human-friendly version label",
        parse(from_os_str)
    )]
    info_file: Option<PathBuf>,

    #[structopt(long = "company", help = "A company name to stamp in")]
    company: Option<String>,
}

impl VerstampOptions {
    /// Validate the command-line arguments and resolve them into a stamping
    /// configuration. Nothing in the tree is touched until this has
    /// succeeded.
    fn into_config(self) -> Result<app::StampConfig> {
        if !self.source_dir.is_dir() {
            return Err(anyhow!(
                "the source directory `{}` does not exist",
                self.source_dir.display()
            ));
        }

        let version = resolve_value(self.version_string, self.version_file, "version")?
            .parse()?;
        let informational_version = resolve_value(
            self.info_string,
            self.info_file,
            "informational version",
        )?;

        Ok(app::StampConfig {
            root: self.source_dir,
            version,
            informational_version,
            company: self.company,
        })
    }
}

/// Resolve a value that may be given either inline on the command line or as
/// the contents of a file, the inline form taking precedence. Values are
/// one-liners, so embedded newlines are dropped and the rest is trimmed.
fn resolve_value(
    inline: Option<String>,
    file: Option<PathBuf>,
    what: &str,
) -> Result<String> {
    // A blank inline value counts as "not supplied" and falls through to the
    // file form.
    let inline = inline.filter(|text| !text.trim().is_empty());

    let raw = if let Some(text) = inline {
        text
    } else if let Some(path) = file {
        atry!(
            fs::read_to_string(&path);
            ["failed to read the {} file `{}`", what, path.display()]
        )
    } else {
        return Err(anyhow!(
            "no {} given: pass either the string or a file containing it",
            what
        ));
    };

    let value = raw.replace(&['\r', '\n'][..], "").trim().to_owned();

    if value.is_empty() {
        return Err(anyhow!("the configured {} is empty", what));
    }

    Ok(value)
}

fn stamp(opts: VerstampOptions) -> Result<()> {
    let config = opts.into_config()?;

    info!("source directory: `{}`", config.root.display());
    info!("version: {}", config.version);
    info!("informational version: {}", config.informational_version);
    if let Some(ref company) = config.company {
        info!("company: {}", company);
    }

    let sess = app::AppSession::initialize(config);
    sess.patch_all()?;
    Ok(())
}

fn main() {
    let opts = VerstampOptions::from_args();

    if let Err(e) = logger::Logger::init() {
        eprintln!("error: cannot initialize logging backend: {}", e);
        std::process::exit(1);
    }
    log::set_max_level(log::LevelFilter::Info);

    let exitcode = match stamp(opts) {
        Ok(()) => 0,
        Err(e) => {
            error!("{}", e);
            e.chain()
                .skip(1)
                .for_each(|cause| logger::Logger::print_cause(cause));
            1
        }
    };

    std::process::exit(exitcode);
}
