use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use console::Emoji;
use tracing_subscriber::EnvFilter;

use feed2rss::{Channel, Feed, load_feed, write_rss, write_rss_file};

// Emoji with fallback for terminals without Unicode support
static FEED: Emoji<'_, '_> = Emoji("📰 ", "");
static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "[+] ");
static FILE: Emoji<'_, '_> = Emoji("📁 ", "");

/// Render a JSON feed description as an RSS 2.0 document
#[derive(Parser, Debug)]
#[command(name = "feed2rss")]
#[command(about = "Render a JSON feed description as an RSS 2.0 document")]
#[command(version)]
struct Args {
    /// JSON feed file, or "-" to read from stdin
    feed: String,

    /// Write the RSS document to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Order of the items in the output
    #[arg(short, long, value_enum, default_value_t = SortOrder::None)]
    sort: SortOrder,

    /// Quiet mode - suppress status output
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum SortOrder {
    /// Newest creation time first
    Newest,
    /// Oldest creation time first
    Oldest,
    /// Keep the order of the input
    None,
}

impl SortOrder {
    fn apply(self, feed: &mut Feed) {
        match self {
            SortOrder::Newest => feed.sort_items(|a, b| b.created.cmp(&a.created)),
            SortOrder::Oldest => feed.sort_items(|a, b| a.created.cmp(&b.created)),
            SortOrder::None => {}
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut feed = load_feed(&args.feed)
        .with_context(|| format!("Failed to load feed from {}", args.feed))?;
    args.sort.apply(&mut feed);

    let channel = Channel::from_feed(&feed);

    match &args.output {
        Some(path) => {
            write_rss_file(&channel, path).context("Failed to write RSS feed")?;

            if !args.quiet {
                eprintln!(
                    "\n{FEED}{} {} {}",
                    channel.title.bold().green(),
                    channel.items.len().to_string().cyan(),
                    "items".dimmed()
                );
                eprintln!(
                    "{SUCCESS}{FILE}{}\n",
                    path.display().to_string().cyan()
                );
            }
        }
        None => {
            write_rss(&channel, std::io::stdout().lock()).context("Failed to write RSS feed")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::DateTime;
    use clap::CommandFactory;
    use feed2rss::Item;

    fn feed() -> Feed {
        let mut feed = Feed::default();
        for (title, created) in [
            ("middle", "2013-01-17T09:52:35-05:00"),
            ("oldest", "2013-01-16T21:52:35-05:00"),
            ("newest", "2013-01-18T21:52:35-05:00"),
        ] {
            feed.add(Item {
                title: title.to_string(),
                created: Some(DateTime::parse_from_rfc3339(created).unwrap()),
                ..Item::default()
            });
        }
        feed
    }

    fn titles(feed: &Feed) -> Vec<&str> {
        feed.items.iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn sort_defaults_to_input_order() {
        let args = Args::parse_from(["feed2rss", "feed.json"]);
        assert_eq!(args.sort, SortOrder::None);
        assert!(args.output.is_none());

        let mut feed = feed();
        args.sort.apply(&mut feed);
        assert_eq!(titles(&feed), vec!["middle", "oldest", "newest"]);
    }

    #[test]
    fn sort_newest_and_oldest() {
        let mut feed = feed();
        SortOrder::Newest.apply(&mut feed);
        assert_eq!(titles(&feed), vec!["newest", "middle", "oldest"]);

        SortOrder::Oldest.apply(&mut feed);
        assert_eq!(titles(&feed), vec!["oldest", "middle", "newest"]);
    }

    #[test]
    fn output_and_sort_flags_parse() {
        let args = Args::parse_from(["feed2rss", "-", "-o", "rss.xml", "--sort", "newest", "-q"]);
        assert_eq!(args.feed, "-");
        assert_eq!(args.output, Some(PathBuf::from("rss.xml")));
        assert_eq!(args.sort, SortOrder::Newest);
        assert!(args.quiet);
    }
}
