//! The `pattern_break` prelude for convenient library usage.
//!
//! Re-exports the types and functions most programs need, so a single glob
//! import is enough to drive the pipeline.
//!
//! # Example
//!
//! ```
//! use pattern_break::prelude::*;
//! # fn main() -> Result<()> {
//!
//! let config = ConfigBuilder::new().directories(["."]).quiet(true).build()?;
//! let token = CancellationToken::new();
//! let report = run(&config, &token, None)?;
//! assert!(report.visible_groups <= report.groups);
//!
//! # Ok(())
//! # }
//! ```

pub use crate::analysis::{BlockPolicy, CoverageExtractor, RangePattern};
pub use crate::cancellation::CancellationToken;
pub use crate::config::{
    CheckTarget, Config, ConfigBuilder, OutputChoice, OutputFormat, RangeMode, ShowMode,
};
pub use crate::core_types::{ArtifactKind, GroupResult, MissingItem, Segment};
pub use crate::errors::{Error, Result};
pub use crate::filtering::NameFilter;
pub use crate::output::{ClipboardOutcome, OutputFormatter};
pub use crate::{analyze, collect, format, run, RunReport};
