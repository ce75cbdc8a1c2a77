use crate::types::{ImageFormatArg, LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "propview")]
#[command(about = "Inspect property listings against their category rules", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Config file (default: $PROPVIEW_CONFIG or the user config dir)"
    )]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List registered categories")]
    Categories,

    #[command(about = "Show the editor fields of a category")]
    Fields {
        #[arg(help = "Category identifier, e.g. flat-for-sale")]
        category: String,
    },

    #[command(about = "Check a listing record for missing required fields")]
    Validate {
        #[arg(help = "Listing record (JSON)")]
        file: PathBuf,
    },

    #[command(about = "Render the detail view of a listing record")]
    Show {
        #[arg(help = "Listing record (JSON)")]
        file: PathBuf,
    },

    #[command(about = "Derive an optimized image URL")]
    Image {
        url: String,

        #[arg(long, default_value = "webp")]
        image_format: ImageFormatArg,

        #[arg(long, default_value = "80")]
        quality: u8,

        #[arg(long, help = "Resize to this width")]
        width: Option<u32>,

        #[arg(long, help = "Print the responsive srcset instead")]
        srcset: bool,
    },

    #[command(about = "Probe a listing's primary image with retries and report the outcome")]
    Resolve {
        #[arg(help = "Listing record (JSON)")]
        file: PathBuf,
    },
}
