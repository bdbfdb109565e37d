use serde::Serialize;

use crate::model::scores::Suggestions;
use crate::model::thresholds::ScoringProfile;

#[derive(Debug, Serialize)]
struct ToolMeta<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct SuggestionsDocument<'a> {
    tool: ToolMeta<'a>,
    profile: &'a ScoringProfile,
    #[serde(flatten)]
    suggestions: &'a Suggestions,
}

pub fn render_suggestions_json(
    suggestions: &Suggestions,
    profile: &ScoringProfile,
) -> serde_json::Result<String> {
    let doc = SuggestionsDocument {
        tool: ToolMeta {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        },
        profile,
        suggestions,
    };
    let mut out = serde_json::to_string_pretty(&doc)?;
    out.push('\n');
    Ok(out)
}
