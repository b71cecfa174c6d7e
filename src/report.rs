//! Report writing.
//!
//! Serializes an [`Extraction`] to a plain-text file in a fixed
//! human-readable layout. Organization names are sorted lexicographically
//! at write time so the file is deterministic even though the set is not.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::result::Extraction;

/// Substituted for metadata fields the configuration never produced.
const NOT_AVAILABLE: &str = "Not Available";

/// Write an extraction to `path`, creating or overwriting the file.
///
/// Layout:
///
/// ```text
/// Company Company/Stock Names:
/// - <name>
///
/// Publication Time:
/// - <publication_timestamp or "Not Available">
///
/// Author:
/// - <author or "Not Available">
///
/// Topics:
/// - <topics or "Not Available">
/// ```
///
/// I/O failures come back as [`crate::Error::Io`]; nothing panics, and the
/// file handle is closed on every path.
pub fn write_report(extraction: &Extraction, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "Company Company/Stock Names:")?;
    let mut names: Vec<&str> = extraction
        .organizations
        .iter()
        .map(String::as_str)
        .collect();
    names.sort_unstable();
    for name in names {
        writeln!(writer, "- {name}")?;
    }

    writeln!(writer)?;
    writeln!(writer, "Publication Time:")?;
    writeln!(writer, "- {}", field(extraction, "publication_timestamp"))?;

    writeln!(writer)?;
    writeln!(writer, "Author:")?;
    writeln!(writer, "- {}", field(extraction, "author"))?;

    writeln!(writer)?;
    writeln!(writer, "Topics:")?;
    writeln!(writer, "- {}", field(extraction, "topics"))?;

    writer.flush()?;

    info!(path = %path.display(), "report written");
    Ok(())
}

fn field<'a>(extraction: &'a Extraction, name: &str) -> &'a str {
    extraction
        .metadata
        .get(name)
        .map_or(NOT_AVAILABLE, String::as_str)
}
