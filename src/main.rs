use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};

use fridgefriend_match::input::load_catalog;
use fridgefriend_match::logging::{self, Verbosity};
use fridgefriend_match::model::thresholds::{
    ProfileError, ProfileOverrides, RankOrder, ScoringProfile, load_overrides,
};
use fridgefriend_match::pipeline::stage1_normalize::NameIndex;
use fridgefriend_match::pipeline::stage2_score::score_pair;
use fridgefriend_match::pipeline::stage4_suggest::suggest;
use fridgefriend_match::pipeline::stage5_report::{ReportFormat, render_suggestions, write_report};
use fridgefriend_match::report::text::render_score_line;
use fridgefriend_match::{AppError, ItemId, MatchError, Presence, Suggestions};

#[derive(Parser, Debug)]
#[command(
    name = "fridgefriend-match",
    version,
    about = "Similar-item name matching for FridgeFriend item catalogs"
)]
struct Cli {
    /// Debug-level logging on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only warnings and errors on stderr.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Suggest same-name and similar items for a name being added or edited.
    Suggest(SuggestArgs),
    /// Score a single candidate name against a query name.
    Score(ScoreArgs),
}

#[derive(Args, Debug)]
struct SuggestArgs {
    /// Item catalog (.tsv, .json, optionally .gz).
    #[arg(long)]
    catalog: PathBuf,

    /// Name being added or edited. Defaults to the name of --exclude-id.
    #[arg(long, required_unless_present = "exclude_id")]
    query: Option<String>,

    /// Presence the item is saved with (have|need).
    #[arg(long)]
    presence: Option<Presence>,

    /// Id of the item being edited; never suggested to itself.
    #[arg(long)]
    exclude_id: Option<u64>,

    #[arg(long, value_enum, default_value_t = FormatArg::Tsv)]
    format: FormatArg,

    /// Write to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    #[command(flatten)]
    profile: ProfileArgs,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    query: String,
    candidate: String,

    #[command(flatten)]
    profile: ProfileArgs,
}

#[derive(Args, Debug, Default)]
struct ProfileArgs {
    /// JSON scoring profile; flags below override it.
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Minimum score kept.
    #[arg(long)]
    cutoff: Option<f32>,

    /// Maximum number of similar items returned.
    #[arg(long)]
    max_results: Option<usize>,

    #[arg(long, value_enum)]
    rank: Option<RankArg>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum RankArg {
    Legacy,
    BestFirst,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum FormatArg {
    Tsv,
    Json,
    Text,
}

impl From<RankArg> for RankOrder {
    fn from(value: RankArg) -> Self {
        match value {
            RankArg::Legacy => RankOrder::Legacy,
            RankArg::BestFirst => RankOrder::BestFirst,
        }
    }
}

impl From<FormatArg> for ReportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Tsv => ReportFormat::Tsv,
            FormatArg::Json => ReportFormat::Json,
            FormatArg::Text => ReportFormat::Text,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(verbosity(&cli));
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn verbosity(cli: &Cli) -> Verbosity {
    if cli.verbose {
        Verbosity::Verbose
    } else if cli.quiet {
        Verbosity::Quiet
    } else {
        Verbosity::Normal
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Command::Suggest(args) => run_suggest(&args),
        Command::Score(args) => run_score(&args),
    }
}

fn run_suggest(args: &SuggestArgs) -> Result<(), AppError> {
    let profile = build_profile(&args.profile)?;
    let suggestions = collect_suggestions(args, &profile)?;
    let rendered = render_suggestions(&suggestions, &profile, args.format.into())?;
    write_report(&rendered, args.out.as_deref())?;
    Ok(())
}

/// Loads the catalog and resolves the query, presence and excluded id.
///
/// With `--exclude-id` alone, the edited item's name and presence are used;
/// explicit `--query` / `--presence` win over the inherited values.
fn collect_suggestions(
    args: &SuggestArgs,
    profile: &ScoringProfile,
) -> Result<Suggestions, AppError> {
    let items = load_catalog(&args.catalog)?;
    let index = NameIndex::build(&items);
    if index.is_empty() {
        tracing::warn!(catalog = %args.catalog.display(), "catalog has no items");
    }

    let exclude = args.exclude_id.map(ItemId);
    let edited = match exclude {
        Some(id) => Some(index.get(id).ok_or(AppError::UnknownItem(id))?),
        None => None,
    };
    let query = match (&args.query, edited) {
        (Some(q), _) => q.clone(),
        (None, Some(item)) => item.name.clone(),
        (None, None) => return Err(MatchError::BlankQuery.into()),
    };
    let presence = args.presence.or(edited.map(|item| item.presence));

    Ok(suggest(&index, &query, presence, exclude, profile)?)
}

fn run_score(args: &ScoreArgs) -> Result<(), AppError> {
    let profile = build_profile(&args.profile)?;
    write_report(&score_line(args, &profile)?, None)?;
    Ok(())
}

fn score_line(args: &ScoreArgs, profile: &ScoringProfile) -> Result<String, AppError> {
    if args.query.trim().is_empty() {
        return Err(MatchError::BlankQuery.into());
    }
    let (score, kind) = score_pair(&args.query, &args.candidate, profile);
    Ok(render_score_line(&args.query, &args.candidate, score, kind))
}

/// Defaults, then the profile file, then individual flags.
fn build_profile(args: &ProfileArgs) -> Result<ScoringProfile, ProfileError> {
    let mut profile = ScoringProfile::default_v1();
    if let Some(path) = &args.profile {
        profile.apply(&load_overrides(path)?);
    }
    profile.apply(&ProfileOverrides {
        cutoff: args.cutoff,
        max_results: args.max_results,
        rank_order: args.rank.map(RankOrder::from),
        ..ProfileOverrides::default()
    });
    profile.validate()?;
    tracing::debug!(
        source = %profile_path_label(args.profile.as_deref()),
        cutoff = profile.cutoff,
        max_results = profile.max_results,
        rank_order = ?profile.rank_order,
        "scoring profile resolved"
    );
    Ok(profile)
}

fn profile_path_label(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in".to_string())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
