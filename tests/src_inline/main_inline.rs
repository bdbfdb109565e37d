use super::*;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("fridgefriend_main_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_catalog(dir: &Path) -> PathBuf {
    let path = dir.join("items.tsv");
    fs::write(
        &path,
        "1\tMilk\thave\n2\tMilkshake\thave\n3\tChocolate Milk\tneed\n10\tmilk\tneed\n",
    )
    .unwrap();
    path
}

fn suggest_args(catalog: &Path, extra: &[&str]) -> SuggestArgs {
    let catalog = catalog.to_str().unwrap();
    let mut args = vec!["suggest", "--catalog", catalog];
    args.extend_from_slice(extra);
    let Command::Suggest(args) = parse(&args).unwrap().command else {
        panic!("expected suggest");
    };
    args
}

fn score_args(query: &str, candidate: &str) -> ScoreArgs {
    let Command::Score(args) = parse(&["score", query, candidate]).unwrap().command else {
        panic!("expected score");
    };
    args
}

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("fridgefriend-match").chain(args.iter().copied()))
}

#[test]
fn test_parse_suggest_defaults() {
    let cli = parse(&["suggest", "--catalog", "items.tsv", "--query", "milk"]).unwrap();
    assert_eq!(verbosity(&cli), Verbosity::Normal);
    let Command::Suggest(args) = cli.command else {
        panic!("expected suggest");
    };
    assert_eq!(args.query.as_deref(), Some("milk"));
    assert_eq!(args.format, FormatArg::Tsv);
    assert!(args.presence.is_none());
    assert!(args.out.is_none());
}

#[test]
fn test_parse_suggest_full() {
    let cli = parse(&[
        "-v",
        "suggest",
        "--catalog",
        "items.json",
        "--exclude-id",
        "7",
        "--presence",
        "NEED",
        "--format",
        "json",
        "--rank",
        "best-first",
        "--cutoff",
        "0.6",
    ])
    .unwrap();
    assert_eq!(verbosity(&cli), Verbosity::Verbose);
    let Command::Suggest(args) = cli.command else {
        panic!("expected suggest");
    };
    assert!(args.query.is_none());
    assert_eq!(args.exclude_id, Some(7));
    assert_eq!(args.presence, Some(Presence::Need));
    assert_eq!(args.format, FormatArg::Json);
    assert_eq!(args.profile.rank, Some(RankArg::BestFirst));
}

#[test]
fn test_query_required_without_exclude_id() {
    assert!(parse(&["suggest", "--catalog", "items.tsv"]).is_err());
}

#[test]
fn test_verbose_conflicts_with_quiet() {
    assert!(parse(&["-v", "-q", "score", "milk", "mild"]).is_err());
}

#[test]
fn test_build_profile_flags_override_defaults() {
    let args = ProfileArgs {
        cutoff: Some(0.5),
        max_results: Some(3),
        rank: Some(RankArg::BestFirst),
        ..ProfileArgs::default()
    };
    let profile = build_profile(&args).unwrap();
    assert_eq!(profile.cutoff, 0.5);
    assert_eq!(profile.max_results, 3);
    assert_eq!(profile.rank_order, RankOrder::BestFirst);
    assert_eq!(profile.prefix_score, 0.75);
}

#[test]
fn test_build_profile_rejects_invalid() {
    let args = ProfileArgs {
        max_results: Some(0),
        ..ProfileArgs::default()
    };
    assert!(build_profile(&args).is_err());
    assert_eq!(build_profile(&ProfileArgs::default()).unwrap(), ScoringProfile::default_v1());
}

#[test]
fn test_profile_path_label() {
    assert_eq!(profile_path_label(None), "built-in");
    assert_eq!(profile_path_label(Some(Path::new("p.json"))), "p.json");
}

#[test]
fn test_edited_item_supplies_query_and_presence() {
    let dir = make_temp_dir();
    let catalog = write_catalog(&dir);
    let args = suggest_args(&catalog, &["--exclude-id", "10"]);

    let out = collect_suggestions(&args, &ScoringProfile::default_v1()).unwrap();
    assert_eq!(out.query, "milk");
    assert_eq!(out.presence, Some(Presence::Need));
    let same: Vec<u64> = out.same_name_other_presence.iter().map(|i| i.id.0).collect();
    assert_eq!(same, vec![1]);
    let similar: Vec<u64> = out.similar.iter().map(|m| m.id.0).collect();
    assert_eq!(similar, vec![3, 2, 1]);
    assert!(out.same_name_other_presence.iter().all(|i| i.id != ItemId(10)));
    assert!(out.similar.iter().all(|m| m.id != ItemId(10)));
    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_explicit_presence_overrides_edited_item() {
    let dir = make_temp_dir();
    let catalog = write_catalog(&dir);
    let args = suggest_args(&catalog, &["--exclude-id", "10", "--presence", "have"]);

    let out = collect_suggestions(&args, &ScoringProfile::default_v1()).unwrap();
    assert_eq!(out.presence, Some(Presence::Have));
    assert!(out.same_name_other_presence.is_empty());
    assert_eq!(out.similar.len(), 3);
    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_explicit_query_overrides_edited_item() {
    let dir = make_temp_dir();
    let catalog = write_catalog(&dir);
    let args = suggest_args(&catalog, &["--exclude-id", "10", "--query", "milkshake"]);

    let out = collect_suggestions(&args, &ScoringProfile::default_v1()).unwrap();
    assert_eq!(out.query, "milkshake");
    assert_eq!(out.presence, Some(Presence::Need));
    let same: Vec<u64> = out.same_name_other_presence.iter().map(|i| i.id.0).collect();
    assert_eq!(same, vec![2]);
    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_unknown_edited_item() {
    let dir = make_temp_dir();
    let catalog = write_catalog(&dir);
    let args = suggest_args(&catalog, &["--exclude-id", "99"]);

    let err = collect_suggestions(&args, &ScoringProfile::default_v1()).unwrap_err();
    assert!(matches!(err, AppError::UnknownItem(ItemId(99))));
    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_score_line_and_blank_query() {
    let profile = ScoringProfile::default_v1();
    let line = score_line(&score_args("milk", "Milkshake"), &profile).unwrap();
    assert_eq!(line, "milk\tMilkshake\t0.750000\tprefix\n");

    let err = score_line(&score_args("  ", "Milkshake"), &profile).unwrap_err();
    assert!(matches!(err, AppError::Match(MatchError::BlankQuery)));
}
