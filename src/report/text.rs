use crate::model::scores::{MatchKind, Suggestions};
use crate::model::thresholds::{RankOrder, ScoringProfile};
use crate::report::format_f32_6;

pub fn render_suggestions_text(suggestions: &Suggestions, profile: &ScoringProfile) -> String {
    let mut out = String::new();

    match suggestions.presence {
        Some(p) => out.push_str(&format!(
            "Suggestions for \"{}\" ({})\n",
            suggestions.query, p
        )),
        None => out.push_str(&format!("Suggestions for \"{}\"\n", suggestions.query)),
    }
    out.push_str(&format!(
        "Cutoff: {}  Max results: {}  Order: {}\n\n",
        format_f32_6(profile.cutoff),
        profile.max_results,
        rank_order_label(profile.rank_order)
    ));

    if suggestions.is_empty() {
        out.push_str("No suggestions.\n");
        return out;
    }

    if !suggestions.same_name_other_presence.is_empty() {
        out.push_str("Same name on the other list:\n");
        for item in &suggestions.same_name_other_presence {
            out.push_str(&format!("  #{} {} [{}]\n", item.id, item.name, item.presence));
        }
        out.push('\n');
    }

    if !suggestions.similar.is_empty() {
        out.push_str("Similar items:\n");
        for m in &suggestions.similar {
            out.push_str(&format!(
                "  #{} {} [{}] {} ({})\n",
                m.id,
                m.name,
                m.presence,
                format_f32_6(m.score),
                m.kind.as_str()
            ));
        }
    }

    out
}

pub fn render_score_line(query: &str, candidate: &str, score: f32, kind: MatchKind) -> String {
    format!(
        "{}\t{}\t{}\t{}\n",
        query.trim(),
        candidate.trim(),
        format_f32_6(score),
        kind.as_str()
    )
}

fn rank_order_label(order: RankOrder) -> &'static str {
    match order {
        RankOrder::Legacy => "legacy (ascending)",
        RankOrder::BestFirst => "best-first (descending)",
    }
}
