use async_trait::async_trait;
use moka::sync::Cache;
use std::future::Future;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, warn};

use crate::content::application::content_use_cases::ContentUseCases;
use crate::content::application::domain::{
    Achievement, Education, Experience, ExperienceFilter, ExperienceKind, Profile, Project, Skill,
};
use crate::content::application::ports::incoming::use_cases::ContentError;
use crate::document::application::domain::record::{NoFilter, Record};
use crate::portfolio::application::domain::{PortfolioSnapshot, Section};
use crate::portfolio::application::ports::incoming::use_cases::{
    PortfolioError, PortfolioQueryUseCase,
};

const DEFAULT_TTL_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct PortfolioCacheConfig {
    pub ttl: Duration,
}

impl Default for PortfolioCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(DEFAULT_TTL_SECS),
        }
    }
}

impl PortfolioCacheConfig {
    /// `CONTENT_CACHE_TTL_SECS`, default 60. `0` disables caching.
    pub fn from_env() -> Self {
        let ttl_secs = match std::env::var("CONTENT_CACHE_TTL_SECS") {
            Ok(raw) => raw.parse::<u64>().unwrap_or_else(|_| {
                warn!(value = %raw, "Invalid CONTENT_CACHE_TTL_SECS, using default");
                DEFAULT_TTL_SECS
            }),
            Err(_) => DEFAULT_TTL_SECS,
        };

        Self {
            ttl: Duration::from_secs(ttl_secs),
        }
    }
}

/// Public section reads through a per-section TTL cache.
pub struct CachedPortfolioQueries {
    content: ContentUseCases,
    profile: SectionCache<(), Option<Record<Profile>>>,
    projects: SectionCache<(), Vec<Record<Project>>>,
    education: SectionCache<(), Vec<Record<Education>>>,
    skills: SectionCache<(), Vec<Record<Skill>>>,
    experiences: SectionCache<Option<ExperienceKind>, Vec<Record<Experience>>>,
    achievements: SectionCache<(), Vec<Record<Achievement>>>,
}

/// One section's entries plus a generation counter bumped by every
/// invalidation. `entries` is `None` when caching is disabled.
struct SectionCache<K, V> {
    entries: Option<Cache<K, V>>,
    generation: AtomicU64,
}

impl<K, V> SectionCache<K, V>
where
    K: Hash + Eq + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn new(config: &PortfolioCacheConfig) -> Self {
        let entries = (!config.ttl.is_zero()).then(|| {
            Cache::builder()
                .max_capacity(8)
                .time_to_live(config.ttl)
                .build()
        });

        Self {
            entries,
            generation: AtomicU64::new(0),
        }
    }

    async fn read_through<F>(&self, key: K, load: F) -> Result<V, PortfolioError>
    where
        F: Future<Output = Result<V, ContentError>>,
    {
        let Some(entries) = &self.entries else {
            return Ok(load.await?);
        };

        if let Some(hit) = entries.get(&key) {
            return Ok(hit);
        }

        let generation = self.generation.load(Ordering::SeqCst);
        let value = load.await?;
        entries.insert(key.clone(), value.clone());

        // An invalidation that raced the load must not leave the loaded value behind.
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("Section invalidated during load, dropping loaded entry");
            entries.invalidate(&key);
        }

        Ok(value)
    }

    fn clear(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(entries) = &self.entries {
            entries.invalidate_all();
        }
    }
}

impl CachedPortfolioQueries {
    pub fn new(content: ContentUseCases, config: PortfolioCacheConfig) -> Self {
        Self {
            content,
            profile: SectionCache::new(&config),
            projects: SectionCache::new(&config),
            education: SectionCache::new(&config),
            skills: SectionCache::new(&config),
            experiences: SectionCache::new(&config),
            achievements: SectionCache::new(&config),
        }
    }
}

#[async_trait]
impl PortfolioQueryUseCase for CachedPortfolioQueries {
    async fn profile(&self) -> Result<Option<Record<Profile>>, PortfolioError> {
        self.profile
            .read_through((), self.content.profile.get_current())
            .await
    }

    async fn projects(&self) -> Result<Vec<Record<Project>>, PortfolioError> {
        self.projects
            .read_through((), self.content.projects.get_all_public(NoFilter {}))
            .await
    }

    async fn education(&self) -> Result<Vec<Record<Education>>, PortfolioError> {
        self.education
            .read_through((), self.content.education.get_all_public(NoFilter {}))
            .await
    }

    async fn skills(&self) -> Result<Vec<Record<Skill>>, PortfolioError> {
        self.skills
            .read_through((), self.content.skills.get_all_public(NoFilter {}))
            .await
    }

    async fn experiences(
        &self,
        kind: Option<ExperienceKind>,
    ) -> Result<Vec<Record<Experience>>, PortfolioError> {
        self.experiences
            .read_through(
                kind,
                self.content
                    .experiences
                    .get_all_public(ExperienceFilter { kind }),
            )
            .await
    }

    async fn achievements(&self) -> Result<Vec<Record<Achievement>>, PortfolioError> {
        self.achievements
            .read_through((), self.content.achievements.get_all_public(NoFilter {}))
            .await
    }

    async fn snapshot(&self) -> Result<PortfolioSnapshot, PortfolioError> {
        let (profile, projects, education, skills, experiences, achievements) = futures::try_join!(
            self.profile(),
            self.projects(),
            self.education(),
            self.skills(),
            self.experiences(None),
            self.achievements(),
        )?;

        Ok(PortfolioSnapshot {
            profile,
            projects,
            education,
            skills,
            experiences,
            achievements,
        })
    }

    fn invalidate(&self, section: Section) {
        debug!(?section, "Invalidating public section");

        match section {
            Section::Profile => self.profile.clear(),
            Section::Projects => self.projects.clear(),
            Section::Education => self.education.clear(),
            Section::Skills => self.skills.clear(),
            Section::Experiences => self.experiences.clear(),
            Section::Achievements => self.achievements.clear(),
        }
    }
}
