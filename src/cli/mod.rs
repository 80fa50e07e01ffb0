pub mod folder;
pub mod resolve;
pub mod slug;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "notepub")]
#[command(version)]
#[command(about = "Derive note slugs and resolve publish visibility", long_about = None)]
pub struct Cli {
    #[arg(short, long, env = "NOTEPUB_CONFIG", default_value = "notepub.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the slug derived from a title or an explicit slug
    Slug {
        title: String,
        #[arg(short, long, default_value = "")]
        slug: String,
    },
    /// Normalize slugs and resolve visibility for notes read as JSON
    Resolve {
        /// JSON file holding a note or an array of notes; `-` reads stdin
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// Print the folder whose metadata applies to a slug
    Folder { slug: String },
}
