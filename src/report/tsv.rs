use crate::model::scores::{MatchKind, Suggestions};
use crate::model::thresholds::ScoringProfile;
use crate::report::format_f32_6;

pub const HEADER: &str = "section\tid\tname\tpresence\tkind\tscore";

pub fn render_suggestions_tsv(suggestions: &Suggestions, profile: &ScoringProfile) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    for item in &suggestions.same_name_other_presence {
        out.push_str(&format!(
            "same_name\t{}\t{}\t{}\t{}\t{}\n",
            item.id,
            clean_field(&item.name),
            item.presence,
            MatchKind::Exact.as_str(),
            format_f32_6(profile.exact_score)
        ));
    }
    for m in &suggestions.similar {
        out.push_str(&format!(
            "similar\t{}\t{}\t{}\t{}\t{}\n",
            m.id,
            clean_field(&m.name),
            m.presence,
            m.kind.as_str(),
            format_f32_6(m.score)
        ));
    }
    out
}

fn clean_field(s: &str) -> String {
    s.replace(['\t', '\n', '\r'], " ")
}
