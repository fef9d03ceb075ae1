mod commands;
mod config;
mod loader;
mod logging;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use querybook_core::SortKey;
use querybook_core::share::SharePlatform;
use querybook_core::theme::ThemePreset;

use crate::config::AppConfig;
use crate::loader::{PostSource, load_store, parse_raw};
use crate::logging::init_logging;

/// Browse and check an Excel Query Book post resource from the terminal.
#[derive(Parser, Debug)]
#[clap(name = "querybook", version)]
struct Cli {
    /// Post resource: a file path or an http(s) URL.
    #[clap(short, long)]
    source: Option<String>,

    /// Page URL used to build share and post links.
    #[clap(long)]
    page_url: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Filtered and sorted post cards.
    List {
        #[clap(long, default_value = "")]
        search: String,
        #[clap(long, default_value = "")]
        category: String,
        #[clap(long, default_value_t = SortKey::Newest)]
        sort: SortKey,
        #[clap(long)]
        json: bool,
    },
    /// One post with related posts, neighbours and share links.
    Show { id: String },
    /// Share intent URL for one post (`twitter`, `x` or `linkedin`).
    Share { id: String, platform: SharePlatform },
    /// Report duplicate ids and unparseable dates.
    Check,
    /// Print the CSS variables for a preset or custom colours.
    Theme {
        preset: Option<ThemePreset>,
        #[clap(long)]
        primary: Option<String>,
        #[clap(long)]
        accent: Option<String>,
        #[clap(long)]
        background: Option<String>,
    },
    /// Standalone printable HTML page for one post.
    Print {
        id: String,
        #[clap(short, long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let config = AppConfig::from_env()?.with_overrides(args.source, args.page_url);
    init_logging(config.log_json);

    let source = PostSource::parse(&config.posts);
    let mut stdout = io::stdout().lock();

    match args.command {
        Command::List {
            search,
            category,
            sort,
            json,
        } => {
            let store = load_store(&source).await?;
            commands::list(&store, search, category, sort, json, &mut stdout)?;
        }
        Command::Show { id } => {
            let store = load_store(&source).await?;
            commands::show(&store, &id, &config.page_url, &mut stdout)?;
        }
        Command::Share { id, platform } => {
            let store = load_store(&source).await?;
            commands::share(&store, &id, platform, &config.page_url, &mut stdout)?;
        }
        Command::Check => {
            let posts = parse_raw(&source.read().await?)?;
            commands::check(&posts, &mut stdout)?;
        }
        Command::Theme {
            preset,
            primary,
            accent,
            background,
        } => {
            commands::theme(preset, primary, accent, background, &mut stdout)?;
        }
        Command::Print { id, out } => {
            let store = load_store(&source).await?;
            commands::print(&store, &id, out.as_deref(), &mut stdout)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_flags() {
        let cli = Cli::try_parse_from(["querybook", "list", "--category", "tip", "--sort", "title"]).unwrap();
        match cli.command {
            Command::List { category, sort, .. } => {
                assert_eq!(category, "tip");
                assert_eq!(sort, SortKey::Title);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn share_platform_parses_case_insensitively() {
        let cli = Cli::try_parse_from(["querybook", "share", "xl", "LinkedIn"]).unwrap();
        match cli.command {
            Command::Share { id, platform } => {
                assert_eq!(id, "xl");
                assert_eq!(platform, SharePlatform::LinkedIn);
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert!(Cli::try_parse_from(["querybook", "share", "xl", "myspace"]).is_err());
    }

    #[test]
    fn rejects_unknown_preset() {
        assert!(Cli::try_parse_from(["querybook", "theme", "teal"]).is_err());
    }

    #[test]
    fn global_source_flag_is_kept() {
        let cli = Cli::try_parse_from(["querybook", "--source", "https://x.test/p.json", "check"]).unwrap();
        assert_eq!(cli.source.as_deref(), Some("https://x.test/p.json"));
    }
}
