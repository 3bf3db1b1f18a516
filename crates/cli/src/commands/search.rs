//! Commande de recherche de motifs

use crate::display::{report, table};
use crate::{create_progress_bar, ReportFormat, SearchArgs};
use anyhow::{anyhow, Context, Result};
use motif_core::{FileSource, GibbsMode, MotifSearch, SearchAlgorithm, SearchConfig, SequenceSource};
use std::path::{Path, PathBuf};

/// Options propres à un algorithme
pub struct Overrides {
    pub restart_threshold: Option<usize>,
    pub gibbs_mode: Option<GibbsMode>,
}

pub fn run(
    algorithm: SearchAlgorithm,
    config_path: Option<PathBuf>,
    args: SearchArgs,
    overrides: Overrides,
) -> Result<()> {
    // 1. Configuration: défauts de l'algorithme, fichier, puis options explicites
    let config = build_config(algorithm, config_path.as_deref(), &args, &overrides)?;
    let input = config
        .input
        .clone()
        .ok_or_else(|| anyhow!("Aucun fichier de séquences: utilisez --input ou `input` dans la configuration"))?;

    // 2. Lire les séquences
    let dna = FileSource::new(&input).load()?;
    tracing::info!("{} séquences chargées depuis {}", dna.len(), input.display());

    // 3. Rechercher
    let pb = create_progress_bar(config.max_iterations as u64, &format!("Recherche {}...", algorithm));
    let mut search = MotifSearch::new(config)?;
    let outcome = search.run_with_progress(&dna, |_| pb.inc(1))?;
    pb.finish_and_clear();

    // 4. Rapport
    let rendered = match args.format {
        ReportFormat::Report => report::format_report(&dna, &outcome.motifs, outcome.entropy),
        ReportFormat::Table => table::format_table(&dna, &outcome),
        ReportFormat::Json => serde_json::to_string_pretty(&outcome)?,
    };

    match args.output {
        Some(output) => {
            std::fs::write(&output, rendered)
                .with_context(|| format!("Écriture impossible: {}", output.display()))?;
            tracing::info!("Rapport écrit dans: {}", output.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Fusionne les défauts de l'algorithme, le fichier de configuration et la ligne de commande
pub fn build_config(
    algorithm: SearchAlgorithm,
    config_path: Option<&Path>,
    args: &SearchArgs,
    overrides: &Overrides,
) -> Result<SearchConfig> {
    let defaults = match algorithm {
        SearchAlgorithm::Randomized => SearchConfig::randomized(),
        SearchAlgorithm::Gibbs => SearchConfig::gibbs(),
    };

    let mut config = match config_path {
        Some(path) => config::Config::builder()
            .add_source(config::Config::try_from(&defaults)?)
            .add_source(config::File::from(path))
            .build()
            .and_then(|settings| settings.try_deserialize::<SearchConfig>())
            .with_context(|| format!("Configuration invalide: {}", path.display()))?,
        None => defaults,
    };

    // La sous-commande choisit toujours l'algorithme
    config.algorithm = algorithm;

    if let Some(input) = &args.input {
        config.input = Some(input.clone());
    }
    if let Some(k) = args.k {
        config.k = k;
    }
    if let Some(iterations) = args.iterations {
        config.max_iterations = iterations;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(threshold) = overrides.restart_threshold {
        config.restart_threshold = threshold;
    }
    if let Some(mode) = overrides.gibbs_mode {
        config.gibbs_mode = mode;
    }

    config.validate()?;
    Ok(config)
}
