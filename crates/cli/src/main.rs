//! CLI pour la découverte de motifs

use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use motif_core::{GibbsMode, SearchAlgorithm};
use std::path::PathBuf;

mod commands;
mod display;

use commands::search;

#[derive(Parser)]
#[command(name = "motif")]
#[command(about = "Découverte stochastique de motifs dans des séquences ADN", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Niveau de verbosité (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Fichier de configuration (TOML, JSON, YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Recherche randomisée avec redémarrages
    Randomized {
        #[command(flatten)]
        search: SearchArgs,

        /// Raffinements sans amélioration avant redémarrage
        #[arg(short, long)]
        restart_threshold: Option<usize>,
    },

    /// Échantillonnage de Gibbs
    Gibbs {
        #[command(flatten)]
        search: SearchArgs,

        /// Ensemble de départ de chaque itération
        #[arg(short, long, value_enum)]
        mode: Option<GibbsModeArg>,
    },
}

/// Options communes aux deux recherches
#[derive(Args)]
pub struct SearchArgs {
    /// Fichier de séquences (une par ligne)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Longueur des motifs
    #[arg(short)]
    pub k: Option<usize>,

    /// Nombre d'itérations
    #[arg(short = 'n', long)]
    pub iterations: Option<usize>,

    /// Seed du générateur pseudo-aléatoire
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Format du rapport
    #[arg(short, long, value_enum, default_value = "report")]
    pub format: ReportFormat,

    /// Écrire le rapport dans un fichier
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum GibbsModeArg {
    FreshDraw,
    CarryForward,
}

impl From<GibbsModeArg> for GibbsMode {
    fn from(mode: GibbsModeArg) -> Self {
        match mode {
            GibbsModeArg::FreshDraw => GibbsMode::FreshDraw,
            GibbsModeArg::CarryForward => GibbsMode::CarryForward,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    Report,
    Table,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    motif_core::init_logging(level);

    match cli.command {
        Commands::Randomized {
            search: args,
            restart_threshold,
        } => {
            let overrides = search::Overrides {
                restart_threshold,
                gibbs_mode: None,
            };
            search::run(SearchAlgorithm::Randomized, cli.config, args, overrides)?;
        }
        Commands::Gibbs { search: args, mode } => {
            let overrides = search::Overrides {
                restart_threshold: None,
                gibbs_mode: mode.map(Into::into),
            };
            search::run(SearchAlgorithm::Gibbs, cli.config, args, overrides)?;
        }
    }

    Ok(())
}

/// Crée une barre de progression
pub fn create_progress_bar(length: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(length);
    if let Ok(style) =
        ProgressStyle::default_bar().template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("##-"));
    }
    pb.set_message(msg.to_string());
    pb
}
