pub mod achievement;
pub mod education;
pub mod experience;
pub mod profile;
pub mod project;
pub mod skill;
pub mod validation;

pub use achievement::{Achievement, AchievementPatch};
pub use education::{Education, EducationPatch};
pub use experience::{Experience, ExperienceFilter, ExperienceKind, ExperiencePatch};
pub use profile::{Profile, ProfilePatch, PROFILE_ID};
pub use project::{Project, ProjectPatch};
pub use skill::{Skill, SkillCategory, SkillPatch};
