// src/config/builder_logic.rs

use super::{ConfigBuilder, OutputChoice, OutputTargets};
use crate::errors::ConfigError;
use crate::output::default_output_filename;
use log::warn;
use std::path::PathBuf;

/// Validates combinations of options on the `ConfigBuilder`.
pub(super) fn validate_builder_options(builder: &ConfigBuilder) -> Result<(), ConfigError> {
    if builder.directories.is_empty() {
        return Err(ConfigError::InvalidValue {
            option: "--dir".to_string(),
            reason: "requires at least one directory".to_string(),
        });
    }
    Ok(())
}

/// Determines the final delivery targets.
///
/// No explicit choice means stdout. `all` expands to every target, and a
/// filename on its own selects the file target.
pub(super) fn determine_output_targets(
    outputs: &[OutputChoice],
    filename: Option<PathBuf>,
    quiet: bool,
) -> OutputTargets {
    let mut stdout = outputs.is_empty() && filename.is_none();
    let mut file = filename.is_some();
    let mut clipboard = false;
    for choice in outputs {
        match choice {
            OutputChoice::Stdout => stdout = true,
            OutputChoice::File => file = true,
            OutputChoice::Clip => clipboard = true,
            OutputChoice::All => {
                stdout = true;
                file = true;
                clipboard = true;
            }
        }
    }

    if quiet && stdout && !file && !clipboard {
        warn!("--quiet with stdout as the only target: the report will not be shown anywhere.");
    }

    OutputTargets {
        stdout,
        file: file.then(|| filename.unwrap_or_else(default_output_filename)),
        clipboard,
        quiet,
    }
}
