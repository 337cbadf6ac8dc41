// Copyright 2021 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the MIT License.

//! Locating target files in the source tree.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::{atry, errors::Result};

/// Find every file with the given name under the root directory, recursing
/// through all subdirectories. The ordering of the results is whatever the
/// filesystem enumeration gives us.
pub fn find_files_named(root: &Path, name: &str) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = atry!(
            entry;
            ["error traversing the directory tree under `{}`", root.display()]
        );

        if entry.file_type().is_file() && entry.file_name() == name {
            paths.push(entry.into_path());
        }
    }

    Ok(paths)
}
