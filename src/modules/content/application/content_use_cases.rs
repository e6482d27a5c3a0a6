use std::sync::Arc;

use crate::content::application::domain::{Achievement, Education, Experience, Project, Skill};
use crate::content::application::ports::incoming::use_cases::{CollectionUseCase, ProfileUseCase};

#[derive(Clone)]
pub struct ContentUseCases {
    pub profile: Arc<dyn ProfileUseCase>,
    pub projects: Arc<dyn CollectionUseCase<Project>>,
    pub education: Arc<dyn CollectionUseCase<Education>>,
    pub experiences: Arc<dyn CollectionUseCase<Experience>>,
    pub skills: Arc<dyn CollectionUseCase<Skill>>,
    pub achievements: Arc<dyn CollectionUseCase<Achievement>>,
}
