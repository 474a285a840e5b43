use std::fmt;

use serde::Deserialize;

/// Closed set of top-level guide sections. Declaration order here is the
/// fixed navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Intro,
    Sequential,
    Concurrent,
    Groupchat,
    Handoff,
    Magentic,
    Advanced,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Intro,
        SectionId::Sequential,
        SectionId::Concurrent,
        SectionId::Groupchat,
        SectionId::Handoff,
        SectionId::Magentic,
        SectionId::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Intro => "intro",
            SectionId::Sequential => "sequential",
            SectionId::Concurrent => "concurrent",
            SectionId::Groupchat => "groupchat",
            SectionId::Handoff => "handoff",
            SectionId::Magentic => "magentic",
            SectionId::Advanced => "advanced",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == slug)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two framework variants every worked example is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum FrameworkId {
    #[serde(rename = "sk")]
    SemanticKernel,
    #[serde(rename = "crew")]
    CrewAi,
}

impl FrameworkId {
    pub fn as_str(self) -> &'static str {
        match self {
            FrameworkId::SemanticKernel => "sk",
            FrameworkId::CrewAi => "crew",
        }
    }
}

impl fmt::Display for FrameworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ExampleId(pub String);

impl ExampleId {
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Analogy {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Step {
    pub title: String,
    pub text: String,
}

/// One framework rendition of an example: install line plus the full
/// script shown in the code panel and copied verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct Implementation {
    pub id: FrameworkId,
    pub name: String,
    pub install: String,
    pub code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Example {
    pub id: ExampleId,
    pub title: String,
    pub intro: String,
    #[serde(default)]
    pub steps: Vec<Step>,
    pub implementations: Vec<Implementation>,
}

impl Example {
    /// Default selection rule: first implementation in declared order.
    pub fn default_implementation(&self) -> &Implementation {
        &self.implementations[0]
    }
}

/// Card on the intro page linking to a pattern section.
#[derive(Debug, Clone, Deserialize)]
pub struct PatternCard {
    pub target: SectionId,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Overview {
    pub badge: Option<String>,
    pub lead: String,
    pub analogy: Analogy,
    #[serde(default)]
    pub cards: Vec<PatternCard>,
}

/// Standalone advanced topic: prose plus one copyable code panel.
#[derive(Debug, Clone, Deserialize)]
pub struct Topic {
    pub title: String,
    pub blurb: String,
    pub install: Option<String>,
    pub code: String,
}

#[derive(Debug, Clone)]
pub enum SectionBody {
    Overview(Overview),
    Patterns {
        analogy: Analogy,
        examples: Vec<Example>,
    },
    Topics {
        lead: String,
        topics: Vec<Topic>,
    },
}

#[derive(Debug, Clone)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    pub description: String,
    pub body: SectionBody,
}

impl Section {
    pub fn examples(&self) -> &[Example] {
        match &self.body {
            SectionBody::Patterns { examples, .. } => examples,
            _ => &[],
        }
    }

    /// Default selection rule: first example in declared order, if the
    /// section is example-based.
    pub fn default_example(&self) -> Option<&Example> {
        self.examples().first()
    }
}
