use crate::content::application::domain::{
    Achievement, Experience, ExperienceKind, Project, Skill, SkillCategory,
};

pub fn project(title: &str, display_order: i32) -> Project {
    Project {
        title: title.to_string(),
        description: format!("{} description", title),
        long_description: None,
        tech_stack: vec!["Rust".to_string(), "Postgres".to_string()],
        github_url: Some("https://github.com/example/portfolio".to_string()),
        live_url: None,
        image_url: None,
        is_featured: false,
        display_order,
    }
}

pub fn skill(name: &str, display_order: i32) -> Skill {
    Skill {
        name: name.to_string(),
        category: SkillCategory::Backend,
        proficiency: 80,
        icon: None,
        display_order,
    }
}

pub fn achievement(title: &str, date: &str) -> Achievement {
    Achievement {
        title: title.to_string(),
        description: String::new(),
        date: date.to_string(),
        certificate_url: None,
        image_url: None,
        display_order: 0,
    }
}

pub fn experience(title: &str, kind: ExperienceKind) -> Experience {
    Experience {
        kind,
        title: title.to_string(),
        organization: "Acme".to_string(),
        description: String::new(),
        start_date: "2021-03".to_string(),
        end_date: None,
        is_current: true,
        display_order: 0,
    }
}
