//! Career Agent — builds career prompts from a static profile and forwards
//! each one to the base agent.
//!
//! Every operation is: build prompt → `get_response(prompt, false)`. The
//! builders are plain functions so prompts can be inspected without a model.

use std::sync::Arc;

use tracing::info;

use crate::agent::base::{AgentResponse, BaseAgent};
use crate::agent::prompts::{
    render, EXPERIENCE_HEADER, EXPERIENCE_SUMMARY_TEMPLATE, JOB_FIT_TEMPLATE,
    JOB_RECOMMENDATIONS_TEMPLATE, SKILLS_SUMMARY_TEMPLATE,
};
use crate::llm_client::{ChatModel, LlmError};
use crate::models::profile::{CareerProfile, Job, SkillCategory};

pub const CAREER_AGENT_NAME: &str = "CareerGuide";
pub const CAREER_AGENT_DESCRIPTION: &str = "I'm the career specialist. I can provide information \
    about skills, experience, and job suitability.";
pub const CAREER_AGENT_AVATAR: &str = "career_avatar.png";

// ────────────────────────────────────────────────────────────────────────────
// Agent
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct CareerAgent {
    base: BaseAgent,
    profile: CareerProfile,
}

impl CareerAgent {
    /// Career agent over the built-in profile.
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self::with_profile(model, CareerProfile::default())
    }

    pub fn with_profile(model: Arc<dyn ChatModel>, profile: CareerProfile) -> Self {
        Self {
            base: BaseAgent::new(
                CAREER_AGENT_NAME,
                CAREER_AGENT_DESCRIPTION,
                Some(CAREER_AGENT_AVATAR.to_string()),
                model,
            ),
            profile,
        }
    }

    pub fn base(&self) -> &BaseAgent {
        &self.base
    }

    pub fn profile(&self) -> &CareerProfile {
        &self.profile
    }

    pub async fn get_skills_summary(&self) -> Result<AgentResponse, LlmError> {
        info!("Requesting skills summary ({} categories)", self.profile.skills.len());
        let prompt = build_skills_summary_prompt(&self.profile.skills);
        self.base.get_response(&prompt, false).await
    }

    pub async fn get_experience_summary(&self) -> Result<AgentResponse, LlmError> {
        info!("Requesting experience summary ({} jobs)", self.profile.experience.len());
        let prompt = build_experience_summary_prompt(&self.profile.experience);
        self.base.get_response(&prompt, false).await
    }

    pub async fn assess_job_fit(&self, job_description: &str) -> Result<AgentResponse, LlmError> {
        info!("Assessing job fit ({} chars of job description)", job_description.len());
        let prompt = build_job_fit_prompt(&self.profile, job_description);
        self.base.get_response(&prompt, false).await
    }

    pub async fn get_job_recommendations<S: AsRef<str>>(
        &self,
        skills: &[S],
    ) -> Result<AgentResponse, LlmError> {
        info!("Requesting job recommendations for {} skills", skills.len());
        let prompt = build_job_recommendations_prompt(skills);
        self.base.get_response(&prompt, false).await
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt builders
// ────────────────────────────────────────────────────────────────────────────

/// Display label for a skill category key.
/// Known keys get their portfolio headings; others are title-cased.
pub fn category_label(category: &str) -> String {
    match category {
        "languages" => "Programming Languages".to_string(),
        "frameworks" => "Frameworks & Libraries".to_string(),
        "tools" => "Tools & Platforms".to_string(),
        "soft_skills" => "Soft Skills".to_string(),
        other => other
            .split(['_', ' '])
            .filter(|w| !w.is_empty())
            .map(|w| {
                let mut chars = w.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" "),
    }
}

pub fn build_skills_summary_prompt(skills: &[SkillCategory]) -> String {
    let skills_block = skills
        .iter()
        .map(|c| format!("{}: {}", category_label(&c.category), c.items.join(", ")))
        .collect::<Vec<_>>()
        .join("\n");

    render(SKILLS_SUMMARY_TEMPLATE, &[("skills_block", &skills_block)])
}

/// Renders the job history as a markdown block headed by `# Work Experience`.
pub fn render_experience(jobs: &[Job]) -> String {
    let mut text = format!("{EXPERIENCE_HEADER}\n\n");
    for job in jobs {
        text.push_str(&format!("## {} at {}\n", job.title, job.company));
        text.push_str(&format!("**{}**\n\n", job.period));
        text.push_str("**Responsibilities:**\n");
        for resp in &job.responsibilities {
            text.push_str(&format!("- {resp}\n"));
        }
        text.push('\n');
    }
    text.trim_end().to_string()
}

pub fn build_experience_summary_prompt(jobs: &[Job]) -> String {
    let experience_text = render_experience(jobs);
    render(
        EXPERIENCE_SUMMARY_TEMPLATE,
        &[("experience_text", &experience_text)],
    )
}

pub fn build_job_fit_prompt(profile: &CareerProfile, job_description: &str) -> String {
    let skills = profile.skills_flat().join(", ");
    let experience = profile.responsibilities_flat().join(" ");
    render(
        JOB_FIT_TEMPLATE,
        &[
            ("job_description", job_description),
            ("skills", &skills),
            ("experience", &experience),
        ],
    )
}

pub fn build_job_recommendations_prompt<S: AsRef<str>>(skills: &[S]) -> String {
    let joined = skills
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(", ");
    render(JOB_RECOMMENDATIONS_TEMPLATE, &[("skills", &joined)])
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::testing::{FailingModel, RecordingModel};

    fn agent_with(model: Arc<RecordingModel>) -> CareerAgent {
        CareerAgent::new(model)
    }

    #[test]
    fn test_career_identity() {
        let agent = agent_with(RecordingModel::replying("ok"));
        assert_eq!(agent.base().name(), "CareerGuide");
        assert_eq!(agent.base().description(), CAREER_AGENT_DESCRIPTION);
        assert_eq!(agent.base().avatar(), "career_avatar.png");
        assert_eq!(agent.profile(), &CareerProfile::default());
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(category_label("languages"), "Programming Languages");
        assert_eq!(category_label("frameworks"), "Frameworks & Libraries");
        assert_eq!(category_label("tools"), "Tools & Platforms");
        assert_eq!(category_label("soft_skills"), "Soft Skills");
        assert_eq!(category_label("cloud_platforms"), "Cloud Platforms");
        assert_eq!(category_label("databases"), "Databases");
    }

    #[tokio::test]
    async fn test_skills_summary_prompt_contains_every_skill() {
        let model = RecordingModel::replying("## Skills");
        let agent = agent_with(model.clone());

        let response = agent.get_skills_summary().await.unwrap();
        assert!(matches!(response, AgentResponse::Text(ref t) if t == "## Skills"));

        let prompt = model.last_prompt();
        for skill in agent.profile().skills_flat() {
            assert!(prompt.contains(skill), "missing skill {skill}");
        }
        assert!(prompt.contains("Programming Languages: Python, JavaScript, TypeScript, Java, SQL"));
        assert!(prompt.contains("Soft Skills: Team leadership, Project management"));
        assert!(prompt.starts_with("Generate a professional summary of the following skills"));
    }

    #[test]
    fn test_skills_prompt_keeps_category_order() {
        let prompt = build_skills_summary_prompt(&CareerProfile::default().skills);
        let langs = prompt.find("Programming Languages:").unwrap();
        let frameworks = prompt.find("Frameworks & Libraries:").unwrap();
        let tools = prompt.find("Tools & Platforms:").unwrap();
        let soft = prompt.find("Soft Skills:").unwrap();
        assert!(langs < frameworks && frameworks < tools && tools < soft);
    }

    #[tokio::test]
    async fn test_experience_summary_prompt_contains_jobs_in_order() {
        let model = RecordingModel::replying("summary");
        let agent = agent_with(model.clone());

        agent.get_experience_summary().await.unwrap();
        let prompt = model.last_prompt();

        let mut cursor = 0;
        for job in &agent.profile().experience {
            let heading = format!("## {} at {}", job.title, job.company);
            let pos = prompt[cursor..]
                .find(&heading)
                .unwrap_or_else(|| panic!("missing or out of order: {heading}"));
            cursor += pos;
            assert!(prompt.contains(&format!("**{}**", job.period)));

            for resp in &job.responsibilities {
                let line = format!("- {resp}\n");
                let pos = prompt[cursor..]
                    .find(&line)
                    .unwrap_or_else(|| panic!("missing or out of order: {resp}"));
                cursor += pos;
            }
        }
    }

    #[test]
    fn test_experience_prompt_with_empty_history_is_well_formed() {
        let prompt = build_experience_summary_prompt(&[]);
        assert!(prompt.contains("# Work Experience"));
        assert!(prompt.starts_with("Based on the following work experience"));
        assert!(prompt.ends_with("Format the response in markdown."));
        assert!(!prompt.contains("**Responsibilities:**"));
        assert!(!prompt.lines().any(|l| l.starts_with("- ")));
    }

    #[test]
    fn test_render_experience_layout() {
        let jobs = vec![Job {
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            period: "2021-2023".to_string(),
            responsibilities: vec!["Built APIs".to_string(), "Wrote docs".to_string()],
        }];
        assert_eq!(
            render_experience(&jobs),
            "# Work Experience\n\n\
             ## Engineer at Acme\n\
             **2021-2023**\n\n\
             **Responsibilities:**\n\
             - Built APIs\n\
             - Wrote docs"
        );
    }

    #[tokio::test]
    async fn test_assess_job_fit_prompt() {
        let model = RecordingModel::replying("fit");
        let agent = agent_with(model.clone());

        agent
            .assess_job_fit("Looking for a backend engineer")
            .await
            .unwrap();
        let prompt = model.last_prompt();

        assert!(prompt.contains("Job Description:\nLooking for a backend engineer\n"));
        for skill in agent.profile().skills_flat() {
            assert!(prompt.contains(skill), "missing skill {skill}");
        }
        for resp in agent.profile().responsibilities_flat() {
            assert!(prompt.contains(resp), "missing responsibility {resp}");
        }
        assert!(prompt.contains("Python, JavaScript, TypeScript, Java, SQL, React"));
        assert!(prompt.contains(
            "Led development of cloud-based SaaS platform Managed team of 5 developers"
        ));
    }

    #[test]
    fn test_job_fit_prompt_inserts_braces_verbatim() {
        let prompt = build_job_fit_prompt(&CareerProfile::default(), "Must know {skills} syntax");
        assert!(prompt.contains("Must know {skills} syntax"));
    }

    #[tokio::test]
    async fn test_job_recommendations_prompt_joins_skills_once() {
        let model = RecordingModel::replying("recs");
        let agent = agent_with(model.clone());

        agent.get_job_recommendations(&["Python", "Go"]).await.unwrap();
        let prompt = model.last_prompt();

        assert_eq!(prompt.matches("Python, Go").count(), 1);
        assert!(prompt.starts_with("Based on the following skills, generate job recommendations"));
    }

    #[test]
    fn test_job_recommendations_accepts_owned_strings() {
        let skills = vec!["Rust".to_string(), "Kubernetes".to_string()];
        let prompt = build_job_recommendations_prompt(&skills);
        assert!(prompt.contains("\n\nRust, Kubernetes\n\n"));
    }

    #[test]
    fn test_job_recommendations_empty_skills() {
        let prompt = build_job_recommendations_prompt::<&str>(&[]);
        assert!(prompt.contains("portfolio website:\n\n\n\nFormat"));
    }

    #[tokio::test]
    async fn test_custom_profile_is_used() {
        let model = RecordingModel::replying("ok");
        let profile = CareerProfile {
            skills: vec![SkillCategory {
                category: "databases".to_string(),
                items: vec!["PostgreSQL".to_string(), "Redis".to_string()],
            }],
            experience: vec![],
        };
        let agent = CareerAgent::with_profile(model.clone(), profile);

        agent.get_skills_summary().await.unwrap();
        assert!(model.last_prompt().contains("Databases: PostgreSQL, Redis"));
    }

    #[tokio::test]
    async fn test_operations_delegate_once_each() {
        let model = RecordingModel::replying("ok");
        let agent = agent_with(model.clone());

        agent.get_skills_summary().await.unwrap();
        agent.get_experience_summary().await.unwrap();
        agent.assess_job_fit("JD").await.unwrap();
        agent.get_job_recommendations(&["Rust"]).await.unwrap();

        assert_eq!(model.prompts().len(), 4);
    }

    #[tokio::test]
    async fn test_model_failure_surfaces_unchanged() {
        let agent = CareerAgent::new(Arc::new(FailingModel));
        let err = agent.get_skills_summary().await.unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 401, .. }));
    }
}
