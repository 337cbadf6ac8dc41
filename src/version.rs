// Copyright 2021 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the MIT License.

//! Version numbers.
//!
//! .NET assembly versions are always four dot-separated non-negative
//! integers. That's the only scheme this tool deals in; "informational"
//! versions are free text and never parsed.

use anyhow::bail;
use std::str::FromStr;

use crate::errors::{Error, Result};

/// A four-part `major.minor.build.revision` assembly version.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AssemblyVersion {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
    pub revision: u32,
}

impl FromStr for AssemblyVersion {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let mut parts = Vec::with_capacity(4);

        for piece in text.split('.') {
            match piece.parse::<u32>() {
                Ok(n) => parts.push(n),
                Err(_) => bail!(
                    "the version component `{}` in `{}` is not a non-negative integer",
                    piece,
                    text
                ),
            }
        }

        if parts.len() != 4 {
            bail!(
                "the version `{}` must comprise exactly four dot-separated integers",
                text
            );
        }

        Ok(AssemblyVersion {
            major: parts[0],
            minor: parts[1],
            build: parts[2],
            revision: parts[3],
        })
    }
}

impl std::fmt::Display for AssemblyVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}
