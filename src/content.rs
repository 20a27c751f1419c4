//! Page content: the built-in portfolio and the optional content file.
//!
//! The built-in content is the page as published. A content file can
//! replace it wholesale as long as it honours the [`Portfolio`] schema;
//! JSON or TOML, chosen by file extension.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::types::{
    About, Certification, Contact, Education, Footer, Hero, Portfolio, Project, Skills,
};

/// Error loading or validating a content file.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read content file `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON content in `{path}`: {message}")]
    Json { path: PathBuf, message: String },

    #[error("invalid TOML content in `{path}`: {message}")]
    Toml { path: PathBuf, message: String },

    #[error("unsupported content format `{0}` (expected .json or .toml)")]
    UnsupportedFormat(String),

    #[error("content field `{0}` must not be empty")]
    EmptyField(String),
}

pub type ContentResult<T> = Result<T, ContentError>;

// ============================================================================
// BUILT-IN CONTENT
// ============================================================================

/// The portfolio as published.
pub fn builtin() -> Portfolio {
    Portfolio {
        brand: "ANTRONIC A".into(),
        hero: Hero {
            headline: "MERN Stack Developer".into(),
            highlight: "Building Digital Experiences".into(),
            subtitle: "Passionate about creating efficient, user-friendly web applications \
                       with modern technologies."
                .into(),
            primary_cta: "View Projects".into(),
            secondary_cta: "Contact Me".into(),
        },
        about: About {
            paragraphs: vec![
                "A passionate and self-driven B.Tech student in Artificial Intelligence and \
                 Data Science at Rajalakshmi Institute of Technology, Chennai, with a strong \
                 focus on full-stack web development."
                    .into(),
                "Proficient in HTML, CSS, JavaScript, React.js, Node.js, Express.js, and \
                 MongoDB, with hands-on experience building dynamic and responsive web \
                 applications."
                    .into(),
                "Skilled in creating efficient backend services and user-friendly frontends. \
                 Eager to contribute to real-world projects, solve technical challenges, and \
                 grow as a MERN stack developer through internship opportunities."
                    .into(),
            ],
        },
        education: vec![Education {
            institution: "Rajalakshmi Institute of Technology".into(),
            program_title: "B.Tech in Artificial Intelligence and Data Science".into(),
            tags: vec!["GPA: 8.21/10".into(), "2023-2027".into()],
        }],
        skills: Skills {
            technical: strings(&[
                "HTML5, CSS3, JavaScript (ES6+)",
                "React.js & Next.js",
                "Node.js & Express.js",
                "MongoDB & Database Design",
                "Git & GitHub",
                "Responsive Web Design",
                "RESTful API Development",
            ]),
            soft: strings(&[
                "Problem Solving",
                "Time Management",
                "Team Collaboration",
                "Adaptability",
                "Fast Learner",
                "Communication",
            ]),
        },
        projects: vec![Project {
            title: "Exam Seating Arrangement Web Application".into(),
            subtitle: "Full-stack Web Application".into(),
            repo_url: "https://github.com/Antronic14/Exam-seating-Arrangement".into(),
            tech_stack: strings(&["Python", "Flask", "JavaScript", "HTML/CSS"]),
            bullets: strings(&[
                "Developed a full-stack web application that dynamically assigns seats based \
                 on department, subject, and classroom capacity",
                "Implemented intelligent seat allocation with round-robin distribution and \
                 subject-based grouping",
                "Integrated admin and student portals with secure login, animated UI, CSV \
                 uploads/downloads, and real-time seat search using roll numbers",
            ]),
        }],
        certifications: vec![
            Certification {
                title: "Creating Websites Using HTML".into(),
                issuer: "MindLuster".into(),
                year: "2023".into(),
                url: None,
            },
            Certification {
                title: "CSS Full Course".into(),
                issuer: "MindLuster".into(),
                year: "2023".into(),
                url: None,
            },
        ],
        contact: Contact {
            blurb: "I'm currently looking for internship opportunities as a MERN stack \
                    developer. If you have any questions or would like to discuss potential \
                    collaborations, feel free to reach out!"
                .into(),
            email_address: "antronic.a.2023.aids@ritchennai.edu.in".into(),
            github_url: "https://github.com/Antronic14".into(),
            linkedin_url: "https://www.linkedin.com/in/antronic-a-2bb74b28b".into(),
        },
        footer: Footer {
            credit: "Designed & Built by Antronic A".into(),
        },
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// CONTENT FILES
// ============================================================================

/// Resolve the page content: the given file, or the built-in portfolio.
pub fn resolve(path: Option<&Path>) -> ContentResult<Portfolio> {
    match path {
        Some(p) => load(p),
        None => Ok(builtin()),
    }
}

/// Load and validate a content file.
pub fn load(path: &Path) -> ContentResult<Portfolio> {
    let raw = fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    let portfolio = parse(&raw, &extension, path)?;
    validate(&portfolio)?;

    info!(
        "event=content_loaded path={} projects={} certifications={}",
        path.display(),
        portfolio.projects.len(),
        portfolio.certifications.len()
    );
    Ok(portfolio)
}

fn parse(raw: &str, extension: &str, path: &Path) -> ContentResult<Portfolio> {
    match extension {
        "json" => serde_json::from_str(raw).map_err(|e| ContentError::Json {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
        "toml" => toml::from_str(raw).map_err(|e| ContentError::Toml {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
        other => Err(ContentError::UnsupportedFormat(other.to_string())),
    }
}

/// Reject content that would render blank headings or dead links.
pub fn validate(portfolio: &Portfolio) -> ContentResult<()> {
    require("brand", &portfolio.brand)?;
    require("hero.headline", &portfolio.hero.headline)?;

    for (i, edu) in portfolio.education.iter().enumerate() {
        require(&format!("education[{i}].institution"), &edu.institution)?;
    }
    for (i, project) in portfolio.projects.iter().enumerate() {
        require(&format!("projects[{i}].title"), &project.title)?;
        require(&format!("projects[{i}].repo_url"), &project.repo_url)?;
    }
    for (i, cert) in portfolio.certifications.iter().enumerate() {
        require(&format!("certifications[{i}].title"), &cert.title)?;
        if let Some(url) = &cert.url {
            require(&format!("certifications[{i}].url"), url)?;
        }
    }

    require("contact.email_address", &portfolio.contact.email_address)?;
    require("contact.github_url", &portfolio.contact.github_url)?;
    require("contact.linkedin_url", &portfolio.contact.linkedin_url)?;
    Ok(())
}

fn require(field: &str, value: &str) -> ContentResult<()> {
    if value.trim().is_empty() {
        Err(ContentError::EmptyField(field.to_string()))
    } else {
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
