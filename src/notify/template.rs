use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template '{template}' left placeholder {token} unresolved")]
    Unresolved { template: String, token: String },
}

/// A message pattern with `{name}` placeholders, instantiated per event. A
/// rendered message must contain no remaining placeholder tokens before it
/// may be handed to the dispatcher.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub name: &'static str,
    pub pattern: &'static str,
}

pub const TEAM_ASSIGNMENT: Template = Template {
    name: "team_assignment",
    pattern: "{player} has joined Team {teamId}.",
};

pub const MATCH_SCHEDULED: Template = Template {
    name: "match_scheduled",
    pattern: "Upcoming schedule: {schedule}.",
};

pub const DISPUTE_OPENED: Template = Template {
    name: "dispute_opened",
    pattern: "New dispute {disputeId} to review.",
};

pub const DISPUTE_RESOLVED: Template = Template {
    name: "dispute_resolved",
    pattern: "Results for dispute on Match {matchId}: {status}.",
};

impl Template {
    pub fn render(&self, values: &[(&str, &str)]) -> Result<String, TemplateError> {
        let mut out = self.pattern.to_string();
        for (key, value) in values {
            out = out.replace(&format!("{{{key}}}"), value);
        }
        if let Some(token) = find_placeholder(&out) {
            return Err(TemplateError::Unresolved {
                template: self.name.to_string(),
                token,
            });
        }
        Ok(out)
    }
}

fn find_placeholder(text: &str) -> Option<String> {
    let start = text.find('{')?;
    let end = text[start..].find('}')? + start;
    Some(text[start..=end].to_string())
}
