//! Static career profile data: skill categories and job history.
//!
//! A profile is fixed at construction and read-only afterwards. The built-in
//! `Default` profile is used unless `CAREER_PROFILE_PATH` points at a JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ProfileError;

/// One labelled group of skills, e.g. `languages` → `["Rust", "SQL"]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<String>,
}

/// A single job in the experience record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub company: String,
    /// Free text, e.g. "2020-Present".
    pub period: String,
    pub responsibilities: Vec<String>,
}

/// Skills and experience owned by a `CareerAgent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerProfile {
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub experience: Vec<Job>,
}

impl CareerProfile {
    /// Reads a profile from a JSON file and validates it.
    pub fn from_json_file(path: &Path) -> Result<Self, ProfileError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ProfileError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ProfileError> {
        let profile: CareerProfile = serde_json::from_str(raw)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Rejects blank fragments so every prompt is assembled from real text.
    pub fn validate(&self) -> Result<(), ProfileError> {
        for category in &self.skills {
            if category.category.trim().is_empty() {
                return Err(ProfileError::Validation(
                    "skill category label cannot be empty".to_string(),
                ));
            }
            if category.items.iter().any(|s| s.trim().is_empty()) {
                return Err(ProfileError::Validation(format!(
                    "skill category '{}' contains an empty item",
                    category.category
                )));
            }
        }

        for (i, job) in self.experience.iter().enumerate() {
            if job.title.trim().is_empty() || job.company.trim().is_empty() {
                return Err(ProfileError::Validation(format!(
                    "job #{i} must have a title and a company"
                )));
            }
            if job.responsibilities.iter().any(|r| r.trim().is_empty()) {
                return Err(ProfileError::Validation(format!(
                    "job '{}' contains an empty responsibility",
                    job.title
                )));
            }
        }

        Ok(())
    }

    /// All skills across categories, in declaration order.
    pub fn skills_flat(&self) -> Vec<&str> {
        self.skills
            .iter()
            .flat_map(|c| c.items.iter().map(String::as_str))
            .collect()
    }

    /// All responsibilities across jobs, in declaration order.
    pub fn responsibilities_flat(&self) -> Vec<&str> {
        self.experience
            .iter()
            .flat_map(|j| j.responsibilities.iter().map(String::as_str))
            .collect()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for CareerProfile {
    fn default() -> Self {
        Self {
            skills: vec![
                SkillCategory {
                    category: "languages".to_string(),
                    items: strings(&["Python", "JavaScript", "TypeScript", "Java", "SQL"]),
                },
                SkillCategory {
                    category: "frameworks".to_string(),
                    items: strings(&[
                        "React",
                        "Vue.js",
                        "Node.js",
                        "Django",
                        "Flask",
                        "Spring Boot",
                    ]),
                },
                SkillCategory {
                    category: "tools".to_string(),
                    items: strings(&["Git", "Docker", "AWS", "Azure", "CI/CD", "Kubernetes"]),
                },
                SkillCategory {
                    category: "soft_skills".to_string(),
                    items: strings(&[
                        "Team leadership",
                        "Project management",
                        "Agile methodologies",
                        "Technical writing",
                        "Client communication",
                    ]),
                },
            ],
            experience: vec![
                Job {
                    title: "Senior Full Stack Developer".to_string(),
                    company: "Tech Innovations Inc.".to_string(),
                    period: "2020-Present".to_string(),
                    responsibilities: strings(&[
                        "Led development of cloud-based SaaS platform",
                        "Managed team of 5 developers",
                        "Implemented CI/CD pipeline reducing deployment time by 40%",
                        "Architected microservices infrastructure",
                    ]),
                },
                Job {
                    title: "Full Stack Developer".to_string(),
                    company: "WebSolutions Co.".to_string(),
                    period: "2017-2020".to_string(),
                    responsibilities: strings(&[
                        "Developed responsive web applications using React and Node.js",
                        "Implemented RESTful APIs and database schemas",
                        "Collaborated with UX/UI designers to implement user-friendly interfaces",
                        "Participated in code reviews and mentored junior developers",
                    ]),
                },
                Job {
                    title: "Junior Developer".to_string(),
                    company: "StartUp Labs".to_string(),
                    period: "2015-2017".to_string(),
                    responsibilities: strings(&[
                        "Built and maintained client websites",
                        "Developed custom WordPress plugins",
                        "Implemented responsive designs and cross-browser compatibility",
                        "Assisted in database design and optimization",
                    ]),
                },
            ],
        }
    }
}
