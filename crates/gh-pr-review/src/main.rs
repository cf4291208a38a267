//! gh-pr-review: fetch a pull request's diff, classify its files, and write
//! a reviewable HTML page.
//!
//! Run with no arguments to list open pull requests for the repository in
//! the current directory; pass a PR number to render its review page.

use anyhow::{Context, Result, bail};
use gh_diff_engine::{filter_relevant_files, parse_unified_diff};
use gh_diff_webview::render_review_page;
use gh_forge_client::{ForgeClient, OctocrabClient, RemoteRepo, TokenResolver, discover_repository};
use octocrab::Octocrab;
use std::path::Path;
use std::sync::Arc;

mod config;

use config::AppConfig;

const USAGE: &str = "Usage: gh-pr-review [--all] [PR_NUMBER]\n\n\
  With no PR number, lists the repository's open pull requests.\n\
  --all    include generated and oversized files in the review page";

const DEFAULT_HOST: &str = "github.com";

/// Parsed command-line arguments.
#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    pr_number: Option<u64>,
    show_all: bool,
    help: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<CliArgs> {
    let mut parsed = CliArgs::default();
    for arg in args {
        match arg.as_str() {
            "--all" => parsed.show_all = true,
            "--help" | "-h" => parsed.help = true,
            other => {
                let number: u64 = other
                    .parse()
                    .map_err(|_| anyhow::anyhow!("unrecognized argument: {other}\n{USAGE}"))?;
                parsed.pr_number = Some(number);
            }
        }
    }
    Ok(parsed)
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    // Load .env before token resolution if the environment has no token yet
    if std::env::var("GITHUB_TOKEN").is_err() {
        match dotenvy::dotenv() {
            Ok(path) => log::debug!("Loaded .env file from {}", path.display()),
            Err(_) => log::debug!(".env file not found, relying on environment variables"),
        }
    }

    let app_config = AppConfig::load();

    let repo = discover_repository(Path::new("."))
        .context("Could not determine the repository; run inside a GitHub project")?;
    log::info!("Repository: {}/{} on {}", repo.owner, repo.repo, repo.host);
    if repo.host != DEFAULT_HOST {
        bail!(
            "remote \"origin\" points at {}, but only {} is supported",
            repo.host,
            DEFAULT_HOST
        );
    }

    let token = TokenResolver::new().get_token().await?;
    let octocrab = Octocrab::builder()
        .personal_token(token)
        .build()
        .context("Failed to initialize GitHub client")?;
    let client = OctocrabClient::new(Arc::new(octocrab));

    match args.pr_number {
        Some(number) => {
            review_pull_request(&client, &repo, number, &app_config, args.show_all).await
        }
        None => list_pull_requests(&client, &repo).await,
    }
}

/// Print the repository's open pull requests, newest first.
async fn list_pull_requests(client: &dyn ForgeClient, repo: &RemoteRepo) -> Result<()> {
    let prs = client
        .fetch_pull_requests(&repo.owner, &repo.repo)
        .await
        .context("Failed to fetch pull requests")?;

    if prs.is_empty() {
        println!("No open pull requests for {}/{}", repo.owner, repo.repo);
        return Ok(());
    }

    for pr in &prs {
        let draft = if pr.draft { " [draft]" } else { "" };
        println!(
            "#{:<5} {}{} ({}, {} -> {})",
            pr.number, pr.title, draft, pr.author, pr.head_branch, pr.base_branch
        );
    }
    println!("\nRun `gh-pr-review <number>` to review one of them.");
    Ok(())
}

/// Fetch, parse, filter and render one pull request's diff.
async fn review_pull_request(
    client: &dyn ForgeClient,
    repo: &RemoteRepo,
    number: u64,
    app_config: &AppConfig,
    show_all_flag: bool,
) -> Result<()> {
    let pr = client
        .fetch_pull_request(&repo.owner, &repo.repo, number)
        .await
        .with_context(|| format!("Failed to fetch PR #{number}"))?;

    let diff_text = client
        .fetch_pull_request_diff(&repo.owner, &repo.repo, number)
        .await
        .with_context(|| format!("Failed to fetch diff for PR #{number}"))?;
    if diff_text.trim().is_empty() {
        bail!("PR #{number} has no textual diff");
    }

    let files = parse_unified_diff(&diff_text, app_config.large_file_line_threshold);
    let total = files.len();

    let show_all = show_all_flag || app_config.show_all;
    let visible = filter_relevant_files(files, show_all);
    log::info!(
        "PR #{}: showing {} of {} changed files",
        number,
        visible.len(),
        total
    );

    let title = format!("PR #{}: {}", pr.number, pr.title);
    let html = render_review_page(&visible, &title);
    std::fs::write(&app_config.output_path, &html)
        .with_context(|| format!("Failed to write {}", app_config.output_path))?;

    println!(
        "Review page for PR #{} written to {}",
        pr.number, app_config.output_path
    );
    let hidden = total - visible.len();
    if hidden > 0 {
        println!("{hidden} generated or oversized files hidden; re-run with --all to include them");
    }
    Ok(())
}
