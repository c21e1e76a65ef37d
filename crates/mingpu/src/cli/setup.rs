use clap::{Args, Parser, Subcommand};
use mingpuapp::query::SortKey;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mingpu", bin_name = "mingpu", version)]
#[command(
    about = "Browse, filter and compare an annotated catalog of generated names",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog document to load (overrides config and MINGPU_CATALOG)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub catalog: Option<PathBuf>,

    /// Print JSON instead of formatted text
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List names, optionally filtered and sorted
    #[command(alias = "ls", display_order = 1)]
    List(ListArgs),

    /// Show one name in full
    #[command(alias = "v", display_order = 2)]
    Show {
        /// Catalog id
        id: u32,
    },

    /// Compare two to four names side by side
    #[command(display_order = 3)]
    Compare {
        /// Catalog ids, in comparison order
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u32>,
    },

    /// Catalog-wide statistics by element, luck and stroke count
    #[command(display_order = 4)]
    Stats,

    /// List the hexagram names present in the catalog
    #[command(display_order = 5)]
    Hexagrams,

    /// Interactive session reading commands from stdin
    #[command(display_order = 6)]
    Browse,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Compatibility score range, e.g. 90-100 (repeatable, OR-ed)
    #[arg(long, value_name = "MIN-MAX")]
    pub score: Vec<String>,

    /// Total stroke range, e.g. 16-20 (repeatable, OR-ed)
    #[arg(long, value_name = "MIN-MAX")]
    pub strokes: Vec<String>,

    /// Luck on any grid: auspicious, neutral, inauspicious or 吉, 半吉, 凶 (repeatable)
    #[arg(long, value_name = "LUCK")]
    pub luck: Vec<String>,

    /// Exact hexagram name
    #[arg(long)]
    pub hexagram: Option<String>,

    /// Free-text search over name, pinyin, meaning and hexagram
    #[arg(short, long)]
    pub query: Option<String>,

    /// Sort by: none, score, strokes or name
    #[arg(short, long, default_value = "none")]
    pub sort: SortKey,

    /// How many pages to show
    #[arg(short, long, default_value_t = 1)]
    pub pages: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_filters() {
        let cli = Cli::parse_from([
            "mingpu", "list", "--score", "90-100", "--score", "60-69", "--luck", "凶", "-s",
            "strokes", "-p", "2",
        ]);
        match cli.command {
            Some(Commands::List(args)) => {
                assert_eq!(args.score, vec!["90-100", "60-69"]);
                assert_eq!(args.luck, vec!["凶"]);
                assert_eq!(args.sort, SortKey::Strokes);
                assert_eq!(args.pages, 2);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["mingpu", "stats", "--json", "--catalog", "names.json"]);
        assert!(cli.json);
        assert_eq!(cli.catalog, Some(PathBuf::from("names.json")));
    }

    #[test]
    fn compare_requires_ids() {
        assert!(Cli::try_parse_from(["mingpu", "compare"]).is_err());
        let cli = Cli::parse_from(["mingpu", "compare", "3", "1"]);
        assert!(matches!(cli.command, Some(Commands::Compare { ids }) if ids == vec![3, 1]));
    }

    #[test]
    fn hexagrams_subcommand() {
        let cli = Cli::parse_from(["mingpu", "hexagrams"]);
        assert!(matches!(cli.command, Some(Commands::Hexagrams)));
    }

    #[test]
    fn bad_sort_key_is_rejected() {
        assert!(Cli::try_parse_from(["mingpu", "list", "--sort", "random"]).is_err());
    }
}
