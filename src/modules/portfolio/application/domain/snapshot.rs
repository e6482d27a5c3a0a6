use serde::Serialize;

use crate::content::application::domain::{
    Achievement, Education, Experience, Profile, Project, Skill,
};
use crate::document::application::domain::record::Record;

/// A public portfolio section. Admin writes invalidate the cached copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Profile,
    Projects,
    Education,
    Skills,
    Experiences,
    Achievements,
}

/// Every public section in one response, each already sorted.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioSnapshot {
    pub profile: Option<Record<Profile>>,
    pub projects: Vec<Record<Project>>,
    pub education: Vec<Record<Education>>,
    pub skills: Vec<Record<Skill>>,
    pub experiences: Vec<Record<Experience>>,
    pub achievements: Vec<Record<Achievement>>,
}
