use thiserror::Error;

use crate::domain::{ExampleId, FrameworkId, SectionId};

/// Catalog failures. The not-found variants indicate a bad id constant,
/// not a runtime condition; the builtin catalog is validated by tests so
/// they are only expected when loading a custom catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown section '{slug}'")]
    SectionNotFound { slug: String },

    #[error("unknown example '{example}' in section '{section}'")]
    ExampleNotFound {
        section: SectionId,
        example: ExampleId,
    },

    #[error("example '{example}' in section '{section}' has no '{framework}' implementation")]
    ImplementationNotFound {
        section: SectionId,
        example: ExampleId,
        framework: FrameworkId,
    },

    #[error("section '{section}' has no topic panel {index}")]
    TopicNotFound { section: SectionId, index: usize },

    #[error("section '{section}' is declared more than once")]
    DuplicateSection { section: SectionId },

    #[error("section '{section}' is missing from the catalog")]
    MissingSection { section: SectionId },

    #[error("duplicate example id '{example}' in section '{section}'")]
    DuplicateExample {
        section: SectionId,
        example: ExampleId,
    },

    #[error("duplicate implementation '{framework}' in example '{example}' of section '{section}'")]
    DuplicateImplementation {
        section: SectionId,
        example: ExampleId,
        framework: FrameworkId,
    },

    #[error("section '{section}': {message}")]
    InvalidSection {
        section: SectionId,
        message: String,
    },
}
