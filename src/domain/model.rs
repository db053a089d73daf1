use serde::{Deserialize, Serialize};

/// Opaque image reference, resolved by whatever hosts the rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRef {
    pub src: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
}

impl AssetRef {
    pub fn new(src: impl Into<String>, alt: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Bare domain, no scheme.
    pub url: String,
    pub image: AssetRef,
    pub tags: Vec<String>,
}

impl Project {
    pub fn link(&self) -> String {
        format!("https://{}", self.url)
    }
}

/// Target proficiency for one skill, as a percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logo {
    pub id: u32,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    GitHub,
    LinkedIn,
    Email,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: String,
    pub href: String,
}

/// In-page sections reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavSection {
    About,
    Projects,
    Skills,
    Logos,
    Contact,
}

impl NavSection {
    pub const ALL: [NavSection; 5] = [
        NavSection::About,
        NavSection::Projects,
        NavSection::Skills,
        NavSection::Logos,
        NavSection::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            NavSection::About => "about",
            NavSection::Projects => "projects",
            NavSection::Skills => "skills",
            NavSection::Logos => "logos",
            NavSection::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavSection::About => "About",
            NavSection::Projects => "Projects",
            NavSection::Skills => "Skills",
            NavSection::Logos => "Logos",
            NavSection::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

/// Fixed copy shown around the tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteCopy {
    pub brand: String,
    pub headline: String,
    pub tagline: String,
    pub projects_heading: String,
    pub skills_heading: String,
    pub contact_heading: String,
    pub contact_blurb: String,
}
