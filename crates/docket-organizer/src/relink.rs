//! Rewriting relative links after a document moves

use regex::{Captures, Regex};
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, warn};

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\]\(([^)]+)\)").expect("link pattern is valid"));

const EXTERNAL_PREFIXES: [&str; 4] = ["http://", "https://", "mailto:", "#"];

/// Rewrite inline links in `text` so they keep pointing at the same files
/// after the document moves from `old_path` to `new_path`
///
/// Both paths are repository-relative. Links that are external, anchors,
/// absolute, contain whitespace, or climb above the repository root are
/// returned untouched. A `#fragment` suffix is carried over.
///
/// # Examples
///
/// ```
/// use docket_organizer::rewrite_links;
/// use std::path::Path;
///
/// let text = "See [design](docs/specs/design.md#goals).";
/// let out = rewrite_links(Path::new("notes.md"), Path::new("docs/_inbox/notes.md"), text);
/// assert_eq!(out, "See [design](../specs/design.md#goals).");
/// ```
pub fn rewrite_links(old_path: &Path, new_path: &Path, text: &str) -> String {
    let old_dir = old_path.parent().unwrap_or(Path::new(""));
    let new_dir = new_path.parent().unwrap_or(Path::new(""));
    if old_dir == new_dir {
        return text.to_string();
    }

    LINK_RE
        .replace_all(text, |caps: &Captures<'_>| match relocate(&caps[1], old_dir, new_dir) {
            Some(link) => format!("]({})", link),
            None => caps[0].to_string(),
        })
        .into_owned()
}

fn relocate(link: &str, old_dir: &Path, new_dir: &Path) -> Option<String> {
    if link.is_empty()
        || link.chars().any(char::is_whitespace)
        || EXTERNAL_PREFIXES.iter().any(|p| link.starts_with(p))
    {
        return None;
    }

    let (target, fragment) = match link.find('#') {
        Some(i) => (&link[..i], &link[i..]),
        None => (link, ""),
    };
    if target.is_empty() || Path::new(target).is_absolute() {
        return None;
    }

    let resolved = normalize(&old_dir.join(target))?;
    let relative = pathdiff::diff_paths(&resolved, new_dir)?;

    let joined = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    let joined = if joined.is_empty() { ".".to_string() } else { joined };
    Some(format!("{}{}", joined, fragment))
}

/// Resolve `.` and `..` lexically; `None` when the path leaves the root
fn normalize(path: &Path) -> Option<PathBuf> {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    return None;
                }
            }
            Component::Normal(part) => out.push(part),
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(out)
}

/// Rewrite links inside every moved file, returning the files that changed
///
/// Failures are logged and skipped; the moves themselves already happened.
pub fn update_cross_references(root: &Path, moves: &[(PathBuf, PathBuf)]) -> Vec<PathBuf> {
    let mut updated = Vec::new();

    for (old_path, new_path) in moves {
        let full = root.join(new_path);
        let content = match fs::read_to_string(&full) {
            Ok(content) => content,
            Err(e) => {
                warn!("failed to update links in {}: {}", new_path.display(), e);
                continue;
            }
        };

        let rewritten = rewrite_links(old_path, new_path, &content);
        if rewritten == content {
            continue;
        }

        match fs::write(&full, rewritten) {
            Ok(()) => {
                debug!("updated links in {}", new_path.display());
                updated.push(new_path.clone());
            }
            Err(e) => warn!("failed to update links in {}: {}", new_path.display(), e),
        }
    }

    updated
}
