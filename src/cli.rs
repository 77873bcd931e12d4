use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vegnbio-branding")]
#[command(about = "Inspect, validate and publish the Veg'N Bio branding")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Build settings file (defaults to ./branding.settings.json when present)
    #[arg(short = 'C', long, global = true)]
    pub settings: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Args, Debug, Clone, Default)]
pub struct DescriptorArgs {
    /// Read the descriptor from a JSON file instead of the built-in branding
    #[arg(short, long)]
    pub descriptor: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the branding descriptor as JSON
    Show {
        #[command(flatten)]
        source: DescriptorArgs,
    },

    /// Check the descriptor and, optionally, its icons in an asset bundle
    Validate {
        #[command(flatten)]
        source: DescriptorArgs,

        /// Asset bundle directory holding the icon files
        #[arg(short, long)]
        assets: Option<PathBuf>,
    },

    /// Generate the web app manifest
    Manifest {
        #[command(flatten)]
        source: DescriptorArgs,

        /// Asset bundle directory, used for icon sizes and inlining
        #[arg(short, long)]
        assets: Option<PathBuf>,

        /// Output file (defaults to <out_dir>/manifest.json from settings)
        #[arg(short, long, conflicts_with = "stdout")]
        out: Option<PathBuf>,

        /// Print the manifest instead of writing it
        #[arg(long)]
        stdout: bool,

        /// Prefix for icon URLs
        #[arg(long)]
        icon_base: Option<String>,

        /// Embed icons as base64 data URLs (requires --assets)
        #[arg(long)]
        inline_icons: bool,

        /// Manifest language tag
        #[arg(long)]
        lang: Option<String>,
    },

    /// Print HTML head tags for the branding
    Head {
        #[command(flatten)]
        source: DescriptorArgs,

        /// Prefix for app icon URLs
        #[arg(long)]
        icon_base: Option<String>,

        /// Prefix for favicon URLs
        #[arg(long)]
        favicon_base: Option<String>,

        /// Also print CSS custom properties for the color palette
        #[arg(long)]
        css: bool,
    },
}
