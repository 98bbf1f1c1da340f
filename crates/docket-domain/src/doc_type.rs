//! Document types declared through the `doc_type` front-matter field

use std::fmt;

/// Declared kind of a document
///
/// The set is closed: any other `doc_type` value is reported as unrecognized
/// by both the classifier and the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DocType {
    /// Feature or system specification
    Spec,

    /// Request for comments
    Rfc,

    /// Architecture decision record
    Adr,

    /// Work plan
    Plan,

    /// Investigation result
    Finding,

    /// How-to or walkthrough
    Guide,

    /// Terminology
    Glossary,

    /// Reference material
    Reference,
}

impl DocType {
    /// Every document type, in canonical order
    pub const ALL: [DocType; 8] = [
        DocType::Spec,
        DocType::Rfc,
        DocType::Adr,
        DocType::Plan,
        DocType::Finding,
        DocType::Guide,
        DocType::Glossary,
        DocType::Reference,
    ];

    /// Get the type name as it appears in front-matter
    pub fn as_str(&self) -> &'static str {
        match self {
            DocType::Spec => "spec",
            DocType::Rfc => "rfc",
            DocType::Adr => "adr",
            DocType::Plan => "plan",
            DocType::Finding => "finding",
            DocType::Guide => "guide",
            DocType::Glossary => "glossary",
            DocType::Reference => "reference",
        }
    }

    /// Parse a type name. Matching is exact: `Spec` is not `spec`.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    /// Subdirectory a document of this type lives in when no override is configured
    pub fn default_directory(&self) -> &'static str {
        match self {
            DocType::Spec => "specs",
            DocType::Rfc => "rfcs",
            DocType::Adr => "adrs",
            DocType::Plan => "plans",
            DocType::Finding => "findings",
            DocType::Guide => "guides",
            DocType::Glossary => "glossary",
            DocType::Reference => "guides",
        }
    }

    /// Valid names in canonical order, used in error messages
    pub fn valid_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.as_str()).collect()
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DocType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid doc_type: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_parse_accepts_only_known_names(name in "[a-z_]{0,12}") {
            let known = DocType::valid_names().contains(&name.as_str());
            prop_assert_eq!(DocType::parse(&name).is_some(), known);
        }
    }

    #[test]
    fn test_parse_round_trips_all_names() {
        for doc_type in DocType::ALL {
            assert_eq!(DocType::parse(doc_type.as_str()), Some(doc_type));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(DocType::parse("Spec"), None);
        assert_eq!(DocType::parse("unknown_type"), None);
    }

    #[test]
    fn test_reference_shares_guides_directory() {
        assert_eq!(DocType::Reference.default_directory(), "guides");
        assert_eq!(DocType::Guide.default_directory(), "guides");
        assert_eq!(DocType::Glossary.default_directory(), "glossary");
    }
}
