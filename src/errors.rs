// Copyright 2021 Peter Williams <peter@newton.cx> and collaborators
// Licensed under the MIT License.

//! Error handling for the CLI application.
//!
//! We just use `anyhow` directly. The `atry!` and `a_ok_or!` macros defined
//! in `main.rs` are the preferred way to attach descriptive context to
//! fallible operations.

pub use anyhow::{Error, Result};
