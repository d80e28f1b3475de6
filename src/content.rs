use std::collections::HashSet;
use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const PORTFOLIO_ASSET: &str = "portfolio.json";

/// Content for the page, loaded once from the embedded asset.
pub static PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(|| match Portfolio::load() {
    Ok(portfolio) => {
        log::info!(
            "loaded portfolio: {} skills, {} projects, {} experience entries",
            portfolio.skills.len(),
            portfolio.projects.len(),
            portfolio.experience.len()
        );
        portfolio
    }
    Err(err) => {
        log::error!("couldn't load portfolio content: {err}");
        Portfolio::default()
    }
});

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content asset not found: {0}")]
    Missing(&'static str),
    #[error("couldn't parse content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("skill {name} has level {level}, expected 0-100")]
    SkillLevel { name: String, level: u8 },
    #[error("duplicate project id {0}")]
    DuplicateProject(u32),
    #[error("experience at {0} has no accomplishments")]
    EmptyExperience(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tools,
    Other,
}

impl SkillCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Tools => "tools",
            SkillCategory::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub name: String,
    pub level: u8,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    pub company: String,
    pub role: String,
    pub period: String,
    pub accomplishments: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub greeting: String,
    pub description: String,
    pub cube_faces: Vec<String>,
    pub about: Vec<String>,
    pub stats: Vec<Stat>,
    pub contact_blurb: String,
    pub email: String,
    pub location: String,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: Vec<SkillRecord>,
    pub projects: Vec<ProjectRecord>,
    pub experience: Vec<ExperienceRecord>,
}

impl Portfolio {
    pub fn load() -> Result<Self, ContentError> {
        let asset =
            ContentAssets::get(PORTFOLIO_ASSET).ok_or(ContentError::Missing(PORTFOLIO_ASSET))?;
        let portfolio = serde_json::from_slice::<Portfolio>(&asset.data)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let portfolio = serde_json::from_str::<Portfolio>(json)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if let Some(skill) = self.skills.iter().find(|s| s.level > 100) {
            return Err(ContentError::SkillLevel {
                name: skill.name.clone(),
                level: skill.level,
            });
        }

        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id) {
                return Err(ContentError::DuplicateProject(project.id));
            }
        }

        if let Some(exp) = self
            .experience
            .iter()
            .find(|e| e.accomplishments.is_empty())
        {
            return Err(ContentError::EmptyExperience(exp.company.clone()));
        }
        Ok(())
    }
}
