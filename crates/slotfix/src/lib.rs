//! Rewrites the `time_slots` of a course catalogue from `"Monday 09:00-10:30"`
//! strings into `{day, start_time, end_time}` objects, in place.

use std::path::Path;

use tracing::info;

mod document;
pub mod error;

pub use document::{convert, load, save, ConversionReport};
pub use error::{Error, Result};

/// Loads `path`, converts it and writes it back over the same file.
///
/// Nothing is written unless loading and converting both succeeded.
pub fn rewrite(path: &Path) -> Result<ConversionReport> {
    let mut document = load(path)?;
    let report = convert(&mut document)?;
    info!(
        courses = report.courses,
        groups = report.groups,
        slots = report.slots,
        unmatched = report.unmatched,
        "converted time slots"
    );
    save(path, &document)?;

    Ok(report)
}
