//! blog-client - post to the blog from the command line

use std::process::ExitCode;

use blog_core::{ApiResult, BlogApiClient, ClientConfig, PostRequest, DEFAULT_LIST_LIMIT};
use clap::{ArgGroup, Parser};
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = r#"Usage: blog-client "Title" "Content" [tags] [mood]"#;

#[derive(Parser)]
#[command(name = "blog-client")]
#[command(about = "Create and read posts through the blog API", long_about = None)]
#[command(group(ArgGroup::new("mode").args(["get", "list", "stats"])))]
struct Cli {
    // Positionals take text starting with '-' (Markdown lists, "-1 day").
    // Known flags still win.
    /// Post title
    #[arg(allow_hyphen_values = true)]
    title: Option<String>,

    /// Post body (Markdown)
    #[arg(allow_hyphen_values = true)]
    content: Option<String>,

    /// Comma-separated tags [default: daily]
    #[arg(allow_hyphen_values = true)]
    tags: Option<String>,

    /// Mood [default: focused]
    #[arg(allow_hyphen_values = true)]
    mood: Option<String>,

    /// Extra positionals are accepted and ignored
    #[arg(hide = true)]
    extra: Vec<String>,

    /// Post date as YYYY-MM-DD [default: today]
    #[arg(long, value_name = "DATE")]
    date: Option<String>,

    /// Fetch the post for --date instead of creating one
    #[arg(long)]
    get: bool,

    /// List posts
    #[arg(long)]
    list: bool,

    /// Limit passed to the list call (the server decides)
    #[arg(long, default_value_t = DEFAULT_LIST_LIMIT, requires = "list")]
    limit: usize,

    /// Show blog statistics
    #[arg(long)]
    stats: bool,

    /// API base URL [env: BLOG_API_URL]
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// API key [env: BLOG_API_KEY]
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let base_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        match verbose {
            0 => "warn",
            1 => "info,blog_core=debug",
            _ => "debug,blog_core=trace",
        }
        .to_string()
    });
    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries the JSON result only
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn run(cli: Cli) -> Result<ApiResult, ExitCode> {
    if !cli.extra.is_empty() {
        tracing::debug!(ignored = ?cli.extra, "ignoring extra positional arguments");
    }
    let config = ClientConfig::new(cli.url.as_deref(), cli.api_key.as_deref());
    tracing::debug!(base_url = config.base_url(), "configured");
    let api = BlogApiClient::from_config(&config);

    if cli.get {
        return Ok(api.get_post(cli.date.as_deref()));
    }
    if cli.list {
        return Ok(api.list_posts(cli.limit));
    }
    if cli.stats {
        return Ok(api.get_stats());
    }

    let (Some(title), Some(content)) = (cli.title, cli.content) else {
        eprintln!("{USAGE}");
        return Err(ExitCode::FAILURE);
    };
    let mut post = PostRequest::new(title, content);
    if let Some(tags) = cli.tags {
        post = post.with_tags(tags);
    }
    if let Some(mood) = cli.mood {
        post = post.with_mood(mood);
    }
    if let Some(date) = cli.date {
        post = post.with_date(date);
    }
    Ok(api.create_post(&post))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match run(cli) {
        Ok(result) => result,
        Err(code) => return code,
    };
    match serde_json::to_string_pretty(&result) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to render result");
            ExitCode::FAILURE
        }
    }
}
