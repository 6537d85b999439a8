use clap::Subcommand;
use std::path::PathBuf;

pub mod convert;
pub mod text;

#[derive(Subcommand)]
pub enum Commands {
    /// Check that text resource files are well formed
    Validate {
        /// XML files to check
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Show group and string counts
    Stats {
        /// XML files to inspect
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Print a single string
    Get {
        /// Source XML file
        path: PathBuf,

        /// Group ID
        #[arg(short, long, allow_negative_numbers = true)]
        group: i32,

        /// String index within the group
        #[arg(short, long)]
        index: usize,
    },

    /// Search string content
    Search {
        /// Source XML file
        path: PathBuf,

        /// Text to look for
        query: String,

        /// Match case exactly
        #[arg(short, long)]
        case_sensitive: bool,

        /// Maximum number of results
        #[arg(short, long, default_value_t = 50)]
        limit: usize,

        /// Only print locations, not text
        #[arg(short, long)]
        quiet: bool,
    },

    /// Replace a single string in place
    Set {
        /// XML file to modify
        path: PathBuf,

        /// Group ID
        #[arg(short, long, allow_negative_numbers = true)]
        group: i32,

        /// String index within the group
        #[arg(short, long)]
        index: usize,

        /// New text
        #[arg(short, long)]
        text: String,
    },

    /// Rewrite an XML file in canonical layout
    Normalize {
        /// Source XML file
        #[arg(short, long)]
        source: PathBuf,

        /// Destination file
        #[arg(short, long)]
        destination: PathBuf,

        /// Indent with tabs instead of four spaces
        #[arg(long)]
        tabs: bool,
    },

    /// Export an XML file to JSON
    Export {
        /// Source XML file
        #[arg(short, long)]
        source: PathBuf,

        /// Output file (defaults to same name with .json extension)
        #[arg(short, long)]
        destination: Option<PathBuf>,
    },
}

impl Commands {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Validate { paths } => text::validate(paths),
            Commands::Stats { paths } => text::stats(paths),
            Commands::Get { path, group, index } => text::get(path, *group, *index),
            Commands::Search {
                path,
                query,
                case_sensitive,
                limit,
                quiet,
            } => text::search(path, query, *case_sensitive, *limit, *quiet),
            Commands::Set {
                path,
                group,
                index,
                text: new_text,
            } => text::set(path, *group, *index, new_text),
            Commands::Normalize {
                source,
                destination,
                tabs,
            } => convert::normalize(source, destination, *tabs),
            Commands::Export {
                source,
                destination,
            } => convert::export_json(source, destination.as_deref()),
        }
    }
}
