// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: JSON output helpers for sports-ai-cli
// ABOUTME: Pretty-prints a value to stdout or writes it to a file

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// Print `value` as pretty JSON, or write it to `path` when given
pub fn emit<T: Serialize + ?Sized>(value: &T, path: Option<&Path>) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    match path {
        Some(path) => fs::write(path, format!("{rendered}\n"))
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            println!("{rendered}");
            Ok(())
        }
    }
}
