//! Domain types for folio.
//!
//! The section table is fixed at compile time. Everything else is
//! static content: immutable records that are laid out and rendered,
//! never mutated.

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// SECTIONS
// ============================================================================

/// Identifier of a navigable section.
///
/// Closed set: the active section can never name something that has no
/// nav entry. String forms double as document anchor ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    About,
    Education,
    Skills,
    Projects,
    Certifications,
    Contact,
}

impl SectionId {
    /// All sections in nav order.
    pub const ALL: [SectionId; 6] = [
        SectionId::About,
        SectionId::Education,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Certifications,
        SectionId::Contact,
    ];

    /// Anchor id of this section in the rendered document.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Education => "education",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Certifications => "certifications",
            SectionId::Contact => "contact",
        }
    }

    /// Position in [`SECTIONS`].
    pub fn index(self) -> usize {
        SECTIONS
            .iter()
            .position(|s| s.id == self)
            .unwrap_or_default()
    }

    /// Section at `index`, if any.
    pub fn nth(index: usize) -> Option<SectionId> {
        SECTIONS.get(index).map(|s| s.id)
    }

    /// Next section in declaration order, wrapping at the end.
    pub fn next(self) -> SectionId {
        SECTIONS[(self.index() + 1) % SECTIONS.len()].id
    }

    /// Previous section in declaration order, wrapping at the start.
    pub fn prev(self) -> SectionId {
        SECTIONS[(self.index() + SECTIONS.len() - 1) % SECTIONS.len()].id
    }

    /// Title shown in the nav.
    pub fn title(self) -> &'static str {
        SECTIONS[self.index()].title
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A nav entry: anchor id plus display title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: SectionId,
    pub title: &'static str,
}

/// The six navigable sections, in nav order.
pub const SECTIONS: [Section; 6] = [
    Section { id: SectionId::About, title: "About" },
    Section { id: SectionId::Education, title: "Education" },
    Section { id: SectionId::Skills, title: "Skills" },
    Section { id: SectionId::Projects, title: "Projects" },
    Section { id: SectionId::Certifications, title: "Certifications" },
    Section { id: SectionId::Contact, title: "Contact" },
];

/// Anchor of the landing block. It has no nav entry.
pub const HERO_ANCHOR: &str = "hero";

// ============================================================================
// CONTENT BLOCKS
// ============================================================================

/// Landing block above the first section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub headline: String,
    /// Accent-colored continuation of the headline.
    pub highlight: String,
    pub subtitle: String,
    /// Label of the call-to-action linking to `#projects`.
    pub primary_cta: String,
    /// Label of the call-to-action linking to `#contact`.
    pub secondary_cta: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub program_title: String,
    /// Short badges: grade, years.
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub subtitle: String,
    pub repo_url: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,
    pub issuer: String,
    pub year: String,
    /// Verification link. Certifications without one render no "View".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub blurb: String,
    pub email_address: String,
    pub github_url: String,
    pub linkedin_url: String,
}

impl Contact {
    /// `mailto:` link for the email address.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email_address)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub credit: String,
}

/// Complete page content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Logo text in the header.
    pub brand: String,
    pub hero: Hero,
    pub about: About,
    pub education: Vec<Education>,
    pub skills: Skills,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub contact: Contact,
    pub footer: Footer,
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for `folio print`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The laid-out document as plain text.
    #[default]
    Human,
    /// The content as JSON.
    Json,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_are_unique_and_ordered() {
        let ids: Vec<&str> = SECTIONS.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["about", "education", "skills", "projects", "certifications", "contact"]
        );
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(SectionId::Contact.next(), SectionId::About);
        assert_eq!(SectionId::About.prev(), SectionId::Contact);
        assert_eq!(SectionId::Skills.next(), SectionId::Projects);
    }

    #[test]
    fn nth_matches_table() {
        assert_eq!(SectionId::nth(0), Some(SectionId::About));
        assert_eq!(SectionId::nth(5), Some(SectionId::Contact));
        assert_eq!(SectionId::nth(6), None);
    }

    #[test]
    fn section_id_serializes_as_anchor() {
        let json = serde_json::to_string(&SectionId::Certifications).unwrap();
        assert_eq!(json, "\"certifications\"");
    }

    #[test]
    fn certification_without_url_omits_field() {
        let cert = Certification {
            title: "CSS Full Course".into(),
            issuer: "MindLuster".into(),
            year: "2023".into(),
            url: None,
        };
        let json = serde_json::to_string(&cert).unwrap();
        assert!(!json.contains("url"));
    }
}
