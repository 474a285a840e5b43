//! Static content catalog for the orchestration patterns guide.
//!
//! The content ships as an embedded TOML document and is deserialized and
//! validated once at startup. After that the catalog is immutable; only
//! the view state elsewhere changes over the process lifetime.

use std::collections::HashSet;

use serde::Deserialize;

pub mod domain;
pub mod error;

pub use domain::{
    Analogy, Example, ExampleId, FrameworkId, Implementation, Overview, PatternCard, Section,
    SectionBody, SectionId, Step, Topic,
};
pub use error::CatalogError;

const BUILTIN_CATALOG: &str = include_str!("../assets/patterns.toml");

#[derive(Debug, Deserialize)]
struct RawCatalog {
    sections: Vec<RawSection>,
}

/// Loose on-disk shape; `into_section` decides which body kind the
/// section is and rejects ambiguous combinations.
#[derive(Debug, Deserialize)]
struct RawSection {
    id: SectionId,
    title: String,
    description: String,
    #[serde(default)]
    overview: Option<Overview>,
    #[serde(default)]
    analogy: Option<Analogy>,
    #[serde(default)]
    examples: Vec<Example>,
    #[serde(default)]
    lead: Option<String>,
    #[serde(default)]
    topics: Vec<Topic>,
}

impl RawSection {
    fn into_section(self) -> Result<Section, CatalogError> {
        let id = self.id;
        let invalid = |message: &str| CatalogError::InvalidSection {
            section: id,
            message: message.to_string(),
        };

        let body = if let Some(overview) = self.overview {
            if !self.examples.is_empty() || !self.topics.is_empty() {
                return Err(invalid("overview sections cannot carry examples or topics"));
            }
            SectionBody::Overview(overview)
        } else if !self.examples.is_empty() {
            let analogy = self
                .analogy
                .ok_or_else(|| invalid("example-based sections require an analogy"))?;
            SectionBody::Patterns {
                analogy,
                examples: self.examples,
            }
        } else if !self.topics.is_empty() {
            let lead = self
                .lead
                .ok_or_else(|| invalid("topic sections require a lead paragraph"))?;
            SectionBody::Topics {
                lead,
                topics: self.topics,
            }
        } else {
            return Err(invalid("section has no body"));
        };

        Ok(Section {
            id,
            title: self.title,
            description: self.description,
            body,
        })
    }
}

/// The immutable content tree. Section order matches the declaration
/// order in the TOML document and drives the navigation rail.
#[derive(Debug)]
pub struct Catalog {
    sections: Vec<Section>,
}

impl Catalog {
    /// Loads the content compiled into the binary. Infallible in practice
    /// (the builtin document is covered by tests), but custom catalogs go
    /// through the same path so the signature stays fallible.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml(BUILTIN_CATALOG)
    }

    pub fn from_toml(raw: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = toml::from_str(raw)?;
        let sections = raw
            .sections
            .into_iter()
            .map(RawSection::into_section)
            .collect::<Result<Vec<_>, _>>()?;
        let catalog = Self { sections };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert(section.id) {
                return Err(CatalogError::DuplicateSection {
                    section: section.id,
                });
            }
        }
        for id in SectionId::ALL {
            if !seen.contains(&id) {
                return Err(CatalogError::MissingSection { section: id });
            }
        }

        for section in &self.sections {
            match &section.body {
                SectionBody::Overview(overview) => {
                    // Card targets are validated so intro clicks cannot dangle.
                    for card in &overview.cards {
                        if !seen.contains(&card.target) {
                            return Err(CatalogError::MissingSection {
                                section: card.target,
                            });
                        }
                    }
                }
                SectionBody::Patterns { examples, .. } => {
                    let mut example_ids = HashSet::new();
                    for example in examples {
                        if !example_ids.insert(example.id.clone()) {
                            return Err(CatalogError::DuplicateExample {
                                section: section.id,
                                example: example.id.clone(),
                            });
                        }
                        if example.implementations.is_empty() {
                            return Err(CatalogError::InvalidSection {
                                section: section.id,
                                message: format!(
                                    "example '{}' has no implementations",
                                    example.id
                                ),
                            });
                        }
                        let mut impl_ids = HashSet::new();
                        for implementation in &example.implementations {
                            if !impl_ids.insert(implementation.id) {
                                return Err(CatalogError::DuplicateImplementation {
                                    section: section.id,
                                    example: example.id.clone(),
                                    framework: implementation.id,
                                });
                            }
                        }
                    }
                }
                SectionBody::Topics { topics, .. } => {
                    if topics.iter().any(|topic| topic.code.trim().is_empty()) {
                        return Err(CatalogError::InvalidSection {
                            section: section.id,
                            message: "topic with empty code panel".to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Every `SectionId` is guaranteed present by `validate`, so this
    /// lookup is infallible.
    pub fn section(&self, id: SectionId) -> &Section {
        self.sections
            .iter()
            .find(|section| section.id == id)
            .expect("validated catalog contains every section id")
    }

    pub fn section_by_slug(&self, slug: &str) -> Result<&Section, CatalogError> {
        let id = SectionId::from_slug(slug).ok_or_else(|| CatalogError::SectionNotFound {
            slug: slug.to_string(),
        })?;
        Ok(self.section(id))
    }

    pub fn example(
        &self,
        section: SectionId,
        example: &ExampleId,
    ) -> Result<&Example, CatalogError> {
        self.section(section)
            .examples()
            .iter()
            .find(|candidate| candidate.id == *example)
            .ok_or_else(|| CatalogError::ExampleNotFound {
                section,
                example: example.clone(),
            })
    }

    pub fn implementation(
        &self,
        section: SectionId,
        example: &ExampleId,
        framework: FrameworkId,
    ) -> Result<&Implementation, CatalogError> {
        self.example(section, example)?
            .implementations
            .iter()
            .find(|implementation| implementation.id == framework)
            .ok_or_else(|| CatalogError::ImplementationNotFound {
                section,
                example: example.clone(),
                framework,
            })
    }

    pub fn topic(&self, section: SectionId, index: usize) -> Result<&Topic, CatalogError> {
        match &self.section(section).body {
            SectionBody::Topics { topics, .. } => topics
                .get(index)
                .ok_or(CatalogError::TopicNotFound { section, index }),
            _ => Err(CatalogError::TopicNotFound { section, index }),
        }
    }
}

#[cfg(test)]
mod tests;
