// Copyright 2021 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the MIT License.

//! State for the verstamp CLI application.

use chrono::{Datelike, Local};
use log::info;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{atry, errors::Result, locate, rewrite, version::AssemblyVersion};

/// The exact file name that we search for and patch.
pub const TARGET_FILE_NAME: &str = "AssemblyInfo.cs";

/// The fully-resolved configuration of one stamping run.
#[derive(Clone, Debug)]
pub struct StampConfig {
    /// The directory tree to search for target files.
    pub root: PathBuf,

    /// The numeric assembly version to stamp in.
    pub version: AssemblyVersion,

    /// The free-text, human-readable version label.
    pub informational_version: String,

    /// A company name; when present, company and copyright attributes are
    /// stamped too.
    pub company: Option<String>,
}

/// One attribute update to apply to every target file.
#[derive(Debug)]
struct AttributeUpdate {
    name: &'static str,
    value: String,
}

/// The main verstamp application state structure.
pub struct AppSession {
    config: StampConfig,
    updates: Vec<AttributeUpdate>,
}

impl AppSession {
    /// Initialize a new application session, resolving the configuration
    /// into the concrete list of attribute updates to apply.
    pub fn initialize(config: StampConfig) -> AppSession {
        let mut updates = Vec::with_capacity(5);

        // Company and copyright only get stamped when a company name was
        // configured. Free-text values are sanitized here, at the call site,
        // since the rewrite layer does no quoting of its own.
        if let Some(ref company) = config.company {
            let company = sanitize_quotes(company);

            updates.push(AttributeUpdate {
                name: "AssemblyCompany",
                value: company.clone(),
            });
            updates.push(AttributeUpdate {
                name: "AssemblyCopyright",
                value: format!("Copyright ©{} {}", company, Local::now().year()),
            });
        }

        let vtext = config.version.to_string();

        updates.push(AttributeUpdate {
            name: "AssemblyVersion",
            value: vtext.clone(),
        });
        updates.push(AttributeUpdate {
            name: "AssemblyFileVersion",
            value: vtext,
        });
        updates.push(AttributeUpdate {
            name: "AssemblyInformationalVersion",
            value: sanitize_quotes(&config.informational_version),
        });

        AppSession { config, updates }
    }

    /// Locate every target file under the root and patch each one in turn.
    ///
    /// Strictly sequential, and there is no rollback: if writing one file
    /// fails, files patched earlier in the run stay patched.
    pub fn patch_all(&self) -> Result<usize> {
        let files = locate::find_files_named(&self.config.root, TARGET_FILE_NAME)?;
        info!(
            "found {} {} file(s) under `{}`",
            files.len(),
            TARGET_FILE_NAME,
            self.config.root.display()
        );

        for path in &files {
            self.patch_one(path)?;
            info!("patched `{}`", path.display());
        }

        Ok(files.len())
    }

    /// Read one file, apply every configured update, and write it back in
    /// place. The whole text is rewritten in a single overwrite.
    fn patch_one(&self, path: &Path) -> Result<()> {
        let metadata = atry!(
            fs::metadata(path);
            ["failed to query metadata of `{}`", path.display()]
        );

        // Some build systems check sources out read-only.
        let mut perms = metadata.permissions();
        if perms.readonly() {
            perms.set_readonly(false);
            atry!(
                fs::set_permissions(path, perms);
                ["failed to clear the read-only flag on `{}`", path.display()]
            );
        }

        let mut text = atry!(
            fs::read_to_string(path);
            ["failed to read file `{}`", path.display()]
        );

        for update in &self.updates {
            text = rewrite::update_or_add_attribute(&text, update.name, &update.value);
        }

        atry!(
            fs::write(path, &text);
            ["failed to write file `{}`", path.display()]
        );

        Ok(())
    }
}

/// Replace double quotes with single quotes so that a free-text value cannot
/// break out of the quote-delimited attribute payload.
fn sanitize_quotes(value: &str) -> String {
    value.replace('"', "'")
}
