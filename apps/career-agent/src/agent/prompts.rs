//! Career agent prompt templates.
//! Placeholders in `{braces}` are filled by the builders in `agent::career`.

/// Replace `{skills_block}` (one `Label: a, b, c` line per category).
pub const SKILLS_SUMMARY_TEMPLATE: &str = "\
Generate a professional summary of the following skills for a portfolio website:

{skills_block}

Format the response in markdown with appropriate sections and highlights.";

/// Replace `{experience_text}` (the rendered work-experience markdown).
pub const EXPERIENCE_SUMMARY_TEMPLATE: &str = "\
Based on the following work experience, generate a professional career summary for a portfolio website:

{experience_text}

Highlight career progression, key achievements, and growth. Format the response in markdown.";

/// Replace `{job_description}`, `{skills}` and `{experience}`.
pub const JOB_FIT_TEMPLATE: &str = "\
Assess the fit for the following job description based on the skills and experience provided:

Job Description:
{job_description}

Skills:
{skills}

Experience:
{experience}

Provide an analysis of strengths, potential gaps, and overall suitability for the role. Format the response in markdown.";

/// Replace `{skills}`.
pub const JOB_RECOMMENDATIONS_TEMPLATE: &str = "\
Based on the following skills, generate job recommendations for a portfolio website:

{skills}

Format the response in markdown.";

/// Header of the rendered experience block.
pub const EXPERIENCE_HEADER: &str = "# Work Experience";

/// Fills `{key}` placeholders in a single pass. Substituted values are never
/// re-scanned, so user text containing `{...}` is inserted verbatim.
/// Unknown placeholders are left untouched.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];

        let matched = vars
            .iter()
            .find(|(key, _)| tail.starts_with(key) && tail[key.len()..].starts_with('}'));

        match matched {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}
