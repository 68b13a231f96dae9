//! Narrative templates per risk type.
//!
//! Templates use `{name}` placeholders filled by [`render`].

use skillweave_core::RiskType;

/// Title and description template for a finding.
pub struct Template {
    pub title: &'static str,
    pub description: &'static str,
}

pub fn template_for(risk_type: RiskType) -> Template {
    match risk_type {
        RiskType::Inversion => Template {
            title: "{dependent} is ahead of {prerequisite}",
            description: "{dependent} ({dependent_score}) leads its prerequisite \
                          {prerequisite} ({prerequisite_score}) by {gap} points. \
                          Check {prerequisite} before building further on it.",
        },
        RiskType::Regression => Template {
            title: "{domain} has regressed",
            description: "{domain} dropped from an average of {before} to {after} \
                          since the previous assessment.",
        },
        RiskType::Bottleneck => Template {
            title: "{domain} is a bottleneck",
            description: "Weakness in {domain} is holding back {downstream} \
                          downstream domains (leverage {leverage}).",
        },
        RiskType::Stalling => Template {
            title: "{domain} has stalled",
            description: "{domain} has stayed near an average of {average} across \
                          {points} assessments over {days} days.",
        },
    }
}

/// Fill a template's placeholders. Unknown placeholders are left as-is.
pub fn render(template: &str, values: &[(&str, String)]) -> String {
    values.iter().fold(template.to_string(), |text, (key, value)| {
        text.replace(&format!("{{{key}}}"), value)
    })
}

/// Render both halves of a finding's narrative.
pub fn narrate(risk_type: RiskType, values: &[(&str, String)]) -> (String, String) {
    let template = template_for(risk_type);
    (
        render(template.title, values),
        render(template.description, values),
    )
}

/// Scores rendered with two decimals, trailing zeros trimmed.
pub fn score(value: f64) -> String {
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    text.to_string()
}
