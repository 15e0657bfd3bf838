//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Render portfolio page views from the folio content catalog"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Site config JSON (defaults apply when omitted).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Write rolling logs to this absolute directory.
    #[arg(long = "log-dir", value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the work grid for a URL query and optional tag clicks.
    Work(WorkArgs),

    /// Show one project detail page.
    Project {
        /// Project slug.
        slug: String,
    },

    /// Show the creations gallery for a category.
    Creations {
        /// Category id: all, animations, arts, graphic, other.
        #[arg(long = "category", default_value = "all")]
        category: String,
    },

    /// Show the music playlist.
    Music {
        /// Track id to mark as playing.
        #[arg(long = "play")]
        play: Option<String>,
    },

    /// List available project tags.
    Tags {
        /// Case-insensitive substring filter.
        #[arg(long = "search", default_value = "")]
        search: String,
    },

    /// Print the sitemap.
    Sitemap {
        /// Emit sitemap XML instead of a plain route list.
        #[arg(long = "xml")]
        xml: bool,
    },

    /// Show profile, timeline and social links.
    About,
}

#[derive(Args)]
pub struct WorkArgs {
    /// Initial page query string, e.g. `?tags=React,Python`.
    #[arg(long = "query", default_value = "")]
    pub query: String,

    /// Toggle a tag in the multi-select filter (repeatable).
    #[arg(long = "toggle", value_name = "TAG")]
    pub toggle: Vec<String>,

    /// Click a single-select tag pill (repeatable).
    #[arg(long = "select", value_name = "TAG")]
    pub select: Vec<String>,

    /// Reset the filter to "All" before applying clicks.
    #[arg(long = "clear")]
    pub clear: bool,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::{CommandFactory, Parser};

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn work_accepts_repeated_tag_clicks() {
        let cli = Cli::try_parse_from([
            "folio",
            "work",
            "--query",
            "?tags=React",
            "--toggle",
            "Python",
            "--toggle",
            "TypeScript",
        ])
        .expect("work args should parse");
        let Command::Work(args) = cli.command else {
            panic!("expected work command");
        };
        assert_eq!(args.query, "?tags=React");
        assert_eq!(args.toggle, vec!["Python", "TypeScript"]);
        assert!(args.select.is_empty());
        assert!(!args.clear);
    }

    #[test]
    fn global_options_follow_subcommand() {
        let cli = Cli::try_parse_from(["folio", "creations", "--category", "arts", "--log-dir", "/tmp/folio"])
            .expect("global options should parse after the subcommand");
        assert!(matches!(cli.command, Command::Creations { ref category } if category == "arts"));
        assert_eq!(cli.log_dir.as_deref(), Some(std::path::Path::new("/tmp/folio")));
    }
}
