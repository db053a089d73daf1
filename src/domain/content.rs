use crate::domain::model::{AssetRef, ContactKind, ContactLink, Logo, Project, SiteCopy, Skill};
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{
    validate_bare_domain, validate_link, validate_non_empty_string, validate_range,
    validate_unique, Validate,
};
use serde::Serialize;

pub const LOGO_COUNT: usize = 12;
pub const LOGO_LINK: &str = "https://example.com";
pub const LOGO_PLACEHOLDER_SRC: &str = "/placeholder.svg?height=64&width=120";
pub const LOGO_WIDTH: u32 = 120;
pub const LOGO_HEIGHT: u32 = 64;

const PROJECT_IMAGE_WIDTH: u32 = 800;
const PROJECT_IMAGE_HEIGHT: u32 = 600;

/// Everything the page displays apart from the view state.
///
/// Built once per view instance and shared read-only, so state changes never
/// rebuild it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentTables {
    pub copy: SiteCopy,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub logos: Vec<Logo>,
    pub contacts: Vec<ContactLink>,
}

impl ContentTables {
    pub fn builtin() -> Self {
        Self {
            copy: site_copy(),
            projects: projects(),
            skills: skills(),
            logos: generate_logos(LOGO_COUNT),
            contacts: contacts(),
        }
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.copy.brand = brand.into();
        self
    }

    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.name == name)
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

impl Default for ContentTables {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Validate for ContentTables {
    fn validate(&self) -> Result<()> {
        self.check_tables().map_err(into_content_error)
    }
}

/// Field checks report the table they failed in, not a config value.
fn into_content_error(err: PortfolioError) -> PortfolioError {
    match err {
        PortfolioError::InvalidConfigValueError {
            field,
            value,
            reason,
        } => PortfolioError::InvalidContentError {
            table: field.split('.').next().unwrap_or_default().to_string(),
            reason: format!("{field} '{value}': {reason}"),
        },
        other => other,
    }
}

impl ContentTables {
    fn check_tables(&self) -> Result<()> {
        validate_non_empty_string("copy.brand", &self.copy.brand)?;

        validate_unique("projects.id", self.projects.iter().map(|p| p.id))?;
        for project in &self.projects {
            validate_non_empty_string("projects.title", &project.title)?;
            validate_bare_domain("projects.url", &project.url)?;
        }

        validate_unique("skills.name", self.skills.iter().map(|s| s.name.as_str()))?;
        for skill in &self.skills {
            validate_range("skills.level", skill.level, 0, 100)?;
        }

        validate_unique("logos.id", self.logos.iter().map(|l| l.id))?;
        for logo in &self.logos {
            validate_link("logos.url", &logo.url)?;
        }

        for contact in &self.contacts {
            validate_link("contacts.href", &contact.href)?;
        }

        if self.skills.is_empty() {
            return Err(PortfolioError::InvalidContentError {
                table: "skills".to_string(),
                reason: "at least one skill is required".to_string(),
            });
        }

        Ok(())
    }
}

/// Placeholder partner logos: `Logo 1` through `Logo {count}`, all pointing at
/// the same link.
pub fn generate_logos(count: usize) -> Vec<Logo> {
    (1..=count as u32)
        .map(|id| Logo {
            id,
            name: format!("Logo {}", id),
            url: LOGO_LINK.to_string(),
        })
        .collect()
}

pub fn logo_image(logo: &Logo) -> AssetRef {
    AssetRef::new(LOGO_PLACEHOLDER_SRC, logo.name.clone(), LOGO_WIDTH, LOGO_HEIGHT)
}

fn site_copy() -> SiteCopy {
    SiteCopy {
        brand: "JbHub".to_string(),
        headline: "WordPress Developer Extraordinaire".to_string(),
        tagline: "Crafting high-performance WordPress solutions with custom themes, plugins, and seamless e-commerce integration.".to_string(),
        projects_heading: "Featured Projects".to_string(),
        skills_heading: "Skills & Expertise".to_string(),
        contact_heading: "Get in Touch".to_string(),
        contact_blurb: "Ready to start your next project? Let's create something amazing together.".to_string(),
    }
}

fn project(id: u32, title: &str, description: &str, url: &str, image: &str, tags: &[&str]) -> Project {
    Project {
        id,
        title: title.to_string(),
        description: description.to_string(),
        url: url.to_string(),
        image: AssetRef::new(image, title, PROJECT_IMAGE_WIDTH, PROJECT_IMAGE_HEIGHT),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn projects() -> Vec<Project> {
    vec![
        project(
            1,
            "Boutique Setters",
            "A membership-based e-commerce platform for exclusive fashion items.",
            "boutiquesetters.com",
            "/images/boutiquesetters.png",
            &["WordPress", "WooCommerce", "Membership"],
        ),
        project(
            2,
            "KBYC Online",
            "Dynamic e-commerce website with advanced product management.",
            "kbyconline.org",
            "/images/kbyconline.png",
            &["WordPress", "E-commerce", "Custom Theme"],
        ),
        project(
            3,
            "9ja Spirit",
            "Entertainment blog with dynamic content management.",
            "9jaspirit.com.ng",
            "/images/9jaspirit.png",
            &["WordPress", "Blog", "Content Management"],
        ),
        project(
            4,
            "Sex Academy",
            "Learning Management System with integrated e-commerce.",
            "sexacademy.eu",
            "/images/sexacademy.png",
            &["WordPress", "LMS", "E-commerce"],
        ),
    ]
}

fn skills() -> Vec<Skill> {
    [
        ("WordPress", 95),
        ("PHP", 85),
        ("JavaScript", 80),
        ("React", 75),
        ("MySQL", 85),
        ("REST API", 80),
        ("Figma", 75),
        ("Graphics Design", 85),
        ("Responsive Design", 90),
    ]
    .into_iter()
    .map(|(name, level)| Skill {
        name: name.to_string(),
        level,
    })
    .collect()
}

fn contacts() -> Vec<ContactLink> {
    vec![
        ContactLink {
            kind: ContactKind::GitHub,
            label: "GitHub".to_string(),
            href: "https://github.com/jerrybarry".to_string(),
        },
        ContactLink {
            kind: ContactKind::LinkedIn,
            label: "LinkedIn".to_string(),
            href: "https://www.linkedin.com/in/barjeremiah/".to_string(),
        },
        ContactLink {
            kind: ContactKind::Email,
            label: "Email".to_string(),
            href: "mailto:barnabasjeremiah01@gmail.com".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorCategory;

    #[test]
    fn test_generate_logos_is_deterministic() {
        let first = generate_logos(LOGO_COUNT);
        let second = generate_logos(LOGO_COUNT);

        assert_eq!(first.len(), 12);
        assert_eq!(first, second);
        assert_eq!(first[0].id, 1);
        assert_eq!(first[0].name, "Logo 1");
        assert_eq!(first[11].id, 12);
        assert_eq!(first[11].name, "Logo 12");
        assert!(first.iter().all(|l| l.url == LOGO_LINK));
    }

    #[test]
    fn test_generate_logos_ids_follow_index() {
        for (index, logo) in generate_logos(LOGO_COUNT).iter().enumerate() {
            assert_eq!(logo.id as usize, index + 1);
            assert_eq!(logo.name, format!("Logo {}", index + 1));
        }
    }

    #[test]
    fn test_builtin_tables() {
        let content = ContentTables::builtin();
        assert_eq!(content.projects.len(), 4);
        assert_eq!(content.skills.len(), 9);
        assert_eq!(content.contacts.len(), 3);
        assert_eq!(content.copy.brand, "JbHub");

        let first = content.project(1).unwrap();
        assert_eq!(first.title, "Boutique Setters");
        assert_eq!(first.tags, vec!["WordPress", "WooCommerce", "Membership"]);

        assert_eq!(content.skill("WordPress").unwrap().level, 95);
        assert_eq!(content.skill("Responsive Design").unwrap().level, 90);
        assert!(content.skill("Rust").is_none());
    }

    #[test]
    fn test_builtin_tables_validate() {
        assert!(ContentTables::builtin().validate().is_ok());
    }

    #[test]
    fn test_duplicate_skill_is_rejected() {
        let mut content = ContentTables::builtin();
        content.skills.push(Skill {
            name: "PHP".to_string(),
            level: 10,
        });
        let err = content.validate().unwrap_err();
        assert!(
            matches!(&err, PortfolioError::InvalidContentError { table, .. } if table == "skills")
        );
        assert_eq!(err.category(), ErrorCategory::Content);
        assert!(err.to_string().contains("skills.name 'PHP'"));
    }

    #[test]
    fn test_skill_level_above_hundred_is_rejected() {
        let mut content = ContentTables::builtin();
        content.skills[0].level = 101;
        let err = content.validate().unwrap_err();
        assert!(
            matches!(&err, PortfolioError::InvalidContentError { table, .. } if table == "skills")
        );
        assert_eq!(err.category(), ErrorCategory::Content);
    }

    #[test]
    fn test_project_url_with_scheme_is_rejected() {
        let mut content = ContentTables::builtin();
        content.projects[0].url = "https://boutiquesetters.com".to_string();
        let err = content.validate().unwrap_err();
        assert!(
            matches!(&err, PortfolioError::InvalidContentError { table, .. } if table == "projects")
        );
        assert_eq!(err.category(), ErrorCategory::Content);
    }

    #[test]
    fn test_empty_skill_table_is_rejected() {
        let mut content = ContentTables::builtin();
        content.skills.clear();
        let err = content.validate().unwrap_err();
        assert!(
            matches!(&err, PortfolioError::InvalidContentError { table, .. } if table == "skills")
        );
    }
}
