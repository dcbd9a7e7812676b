use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "esxkit",
    about = "Esxkit: validation, listing, and renaming for Wi-Fi site-survey project bundles",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a project against an organizational profile
    Validate {
        /// Project directory or .esx bundle
        project: String,

        /// Built-in profile name
        #[arg(long, default_value = "baseline")]
        profile: String,

        /// TOML profile file (takes precedence over --profile)
        #[arg(long)]
        profile_file: Option<String>,

        /// Print a JSON summary instead of the text report
        #[arg(long)]
        json: bool,
    },

    /// Print the normalized access-point records as JSON
    List {
        /// Project directory or .esx bundle
        project: String,
    },

    /// Print flattened picture-note summaries as JSON
    Notes {
        /// Project directory or .esx bundle
        project: String,
    },

    /// Rename every access point using a registered sort strategy
    Rename {
        /// Project directory or .esx bundle
        project: String,

        /// Sort strategy: floor-then-coordinate or floor-then-name
        #[arg(long, default_value = "floor-then-coordinate")]
        order: String,

        /// Output bundle path (bundles only; defaults to a __APs_RENAMED sibling)
        #[arg(long)]
        output: Option<String>,
    },

    /// List the built-in profiles
    Profiles,
}
