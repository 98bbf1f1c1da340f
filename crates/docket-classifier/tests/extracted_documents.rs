//! Classification of documents straight out of the extractor

use docket_classifier::{Classifier, ClassifierConfig};
use docket_domain::{ClassificationReason, Document};
use docket_extractor::Extractor;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

type Tree = BTreeSet<PathBuf>;

fn doc(path: &str, text: &str) -> Document {
    Extractor::new().extract_document(path, text.to_string())
}

#[test]
fn test_batch_classification_drops_noops() {
    let classifier = Classifier::default_config();
    let docs = vec![
        doc("docs/specs/ok.md", "---\ndoc_type: spec\n---\nbody\n"),
        doc("loose.md", "# no header\n"),
        doc("docs/rfc-12.md", "---\ndoc_type: rfc\n---\nbody\n"),
        doc("README.md", "# readme\n"),
    ];

    let decisions = classifier.classify_all::<Tree>(&docs, None);

    assert_eq!(decisions.len(), 2);
    assert_eq!(decisions[0].source, Path::new("loose.md"));
    assert_eq!(decisions[0].suggested.as_deref(), Some(Path::new("docs/_inbox/loose.md")));
    assert_eq!(decisions[1].suggested.as_deref(), Some(Path::new("docs/rfcs/rfc-12.md")));
}

#[test]
fn test_broken_header_is_staged_with_its_own_reason() {
    let classifier = Classifier::default_config();
    let broken = doc("notes.md", "---\ndoc_type: [spec\n---\nbody\n");

    let decision = classifier.classify_document::<Tree>(&broken, None).unwrap();

    assert_eq!(decision.suggested.as_deref(), Some(Path::new("docs/_inbox/notes.md")));
    assert!(matches!(decision.reasons[0], ClassificationReason::MalformedHeader(_)));
}

#[test]
fn test_custom_destinations() {
    let config = ClassifierConfig::from_toml(
        r#"
docs_dir = "handbook"
staging_dir = "incoming"

[destinations]
reference = "reference"
"#,
    )
    .unwrap();
    let classifier = Classifier::new(config);

    let reference = doc("api.md", "---\ndoc_type: reference\n---\n");
    let decision = classifier.classify_document::<Tree>(&reference, None).unwrap();
    assert_eq!(decision.suggested.as_deref(), Some(Path::new("handbook/reference/api.md")));

    // Types missing from the table keep their default directory.
    let spec = doc("inv.md", "---\ndoc_type: spec\n---\n");
    let decision = classifier.classify_document::<Tree>(&spec, None).unwrap();
    assert_eq!(decision.suggested.as_deref(), Some(Path::new("handbook/specs/inv.md")));

    let loose = doc("x.md", "text\n");
    let decision = classifier.classify_document::<Tree>(&loose, None).unwrap();
    assert_eq!(decision.suggested.as_deref(), Some(Path::new("handbook/incoming/x.md")));
}
