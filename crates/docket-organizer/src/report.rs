//! The organization report artifact

use crate::OrganizerError;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Render the report for moves that were performed
pub fn render_report(moves: &[(PathBuf, PathBuf)], staging: &Path, generated: DateTime<Utc>) -> String {
    let mut out = String::new();
    let staging = staging.display();

    let _ = writeln!(out, "# Documentation Organization Report");
    let _ = writeln!(out);
    let _ = writeln!(out, "*Generated: {}*", generated.to_rfc3339_opts(SecondsFormat::Secs, true));
    let _ = writeln!(out);
    let _ = writeln!(out, "## Files Moved ({})", moves.len());
    let _ = writeln!(out);
    for (prior, new) in moves {
        let _ = writeln!(out, "- `{}` → `{}`", prior.display(), new.display());
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "## Rules Applied");
    let _ = writeln!(out);
    let _ = writeln!(out, "- Documents with a recognized `doc_type` moved to their type directory");
    let _ = writeln!(out, "- Documents without usable front-matter moved to `{}/`", staging);
    let _ = writeln!(out, "- Relative links in moved documents rewritten where possible");
    let _ = writeln!(out);
    let _ = writeln!(out, "## Next Steps");
    let _ = writeln!(out);
    let _ = writeln!(out, "1. Review documents in `{}/` and add front-matter", staging);
    let _ = writeln!(out, "2. Run `docket organize --auto-move` again to file them");
    let _ = writeln!(out, "3. Run `docket validate` to check the schema");
    out
}

/// Write the report to `root/report_path`, creating parent directories
pub fn write_report(root: &Path, report_path: &Path, contents: &str) -> Result<PathBuf, OrganizerError> {
    let full = root.join(report_path);
    let io_err = |source| OrganizerError::Report {
        path: report_path.to_path_buf(),
        source,
    };

    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(&full, contents).map_err(io_err)?;

    info!("organization report saved to {}", report_path.display());
    Ok(report_path.to_path_buf())
}
