use crate::cli::CreditsArgs;
use crate::config::CreditsConfig;
use crate::credits::Credits;
use crate::git::GitRepo;
use crate::report::{credits_output, write_html, ReportOptions};
use anyhow::Context;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

pub fn exec(args: CreditsArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => CreditsConfig::load(path).context("Failed to load config")?,
        None => CreditsConfig::default(),
    };

    let normalizer = config.normalizer();
    log::debug!("Loaded {} author aliases", normalizer.alias_count());

    let repo = GitRepo::open(&args.source).context("Failed to open git repository")?;
    let range = repo
        .resolve_range(&args.range)
        .context("Failed to resolve commit range")?;
    log::info!("Resolved {} in {}", args.range, repo.path().display());

    let commits = repo
        .collect_commits(&range, args.include_merges)
        .context("Failed to collect commits from repository")?;

    let filter = config.commit_filter(&args.ignore_prefix);
    let accepted = commits.iter().filter(|commit| {
        let keep = filter.is_credit_commit(commit.files.as_slice());
        if !keep {
            log::debug!("Skipping {}: no creditable files", commit.id);
        }
        keep
    });

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("Aggregating credits...");

    let mut credits = Credits::new(normalizer);
    let processed = credits.process(accepted, |index| {
        pb.set_message(format!("Aggregating credits... {index}"));
        pb.tick();
    });
    pb.finish_and_clear();
    log::info!(
        "Credited {} of {} commits to {} authors",
        processed,
        commits.len(),
        credits.len()
    );

    let options = ReportOptions::new(!args.no_main_credits, config.companies());
    write_html(&args.output, &credits, &options)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    if args.json {
        let output = credits_output(&credits, repo.path(), &args.range);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{} {}", style("Written:").green().bold(), args.output.display());
    }

    Ok(())
}
