//! Recherches stochastiques de motifs
//!
//! [`MotifSearch`] est le point d'entrée: il porte la configuration et
//! l'échantillonneur, puis délègue à la recherche randomisée ou à Gibbs.

pub mod gibbs;
pub mod randomized;

use crate::config::{SearchAlgorithm, SearchConfig};
use crate::error::Result;
use crate::motif::MotifSet;
use crate::sampler::RandomSampler;
use crate::sequence::{SequenceSet, SequenceSource};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

// Importer les macros depuis la racine du crate
use crate::log_operation;

/// Compteurs d'une recherche
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Itérations externes (randomisée) ou itérations de Gibbs effectuées
    pub iterations: usize,

    /// Passes de raffinement (profil puis k-mers les plus probables)
    pub refinements: usize,

    /// Nombre de fois où le meilleur ensemble a été remplacé
    pub improvements: usize,
}

/// Meilleur ensemble trouvé et ses mesures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub algorithm: SearchAlgorithm,
    pub motifs: MotifSet,
    /// Somme des entropies de colonne (plus bas = plus conservé)
    pub score: f64,
    pub information_content: f64,
    /// Entropie moyenne par position
    pub entropy: f64,
    pub consensus: String,
    pub stats: SearchStats,
}

impl SearchOutcome {
    fn new(algorithm: SearchAlgorithm, motifs: MotifSet, stats: SearchStats) -> Result<Self> {
        Ok(Self {
            algorithm,
            score: motifs.score()?,
            information_content: motifs.information_content()?,
            entropy: motifs.entropy()?,
            consensus: motifs.profile()?.consensus(),
            motifs,
            stats,
        })
    }
}

/// Recherche de motifs configurée
pub struct MotifSearch<R: Rng = ChaCha8Rng> {
    config: SearchConfig,
    sampler: RandomSampler<R>,
}

impl MotifSearch<ChaCha8Rng> {
    /// Crée une recherche; ChaCha8 seedé si `config.seed` est défini
    pub fn new(config: SearchConfig) -> Result<Self> {
        let sampler = match config.seed {
            Some(seed) => RandomSampler::seeded(seed),
            None => RandomSampler::from_entropy(),
        };
        Self::with_sampler(config, sampler)
    }
}

impl<R: Rng> MotifSearch<R> {
    /// Crée une recherche avec un générateur fourni par l'appelant
    pub fn with_rng(config: SearchConfig, rng: R) -> Result<Self> {
        Self::with_sampler(config, RandomSampler::new(rng))
    }

    fn with_sampler(config: SearchConfig, sampler: RandomSampler<R>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, sampler })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Charge les séquences depuis `source` puis lance la recherche
    pub fn run_source<S: SequenceSource + ?Sized>(&mut self, source: &S) -> Result<SearchOutcome> {
        let dna = source.load()?;
        self.run(&dna)
    }

    /// Lance la recherche sur `dna`
    pub fn run(&mut self, dna: &SequenceSet) -> Result<SearchOutcome> {
        self.run_with_progress(dna, |_| {})
    }

    /// Lance la recherche; `on_iteration` est appelé après chaque itération
    pub fn run_with_progress<F>(&mut self, dna: &SequenceSet, on_iteration: F) -> Result<SearchOutcome>
    where
        F: FnMut(usize),
    {
        dna.validate_for(self.config.k)?;

        let algorithm = self.config.algorithm;
        let (motifs, stats) = match algorithm {
            SearchAlgorithm::Randomized => log_operation!("randomized_motif_search", {
                randomized::search(&mut self.sampler, dna, &self.config, on_iteration)?
            }),
            SearchAlgorithm::Gibbs => log_operation!("gibbs_sampler", {
                gibbs::search(&mut self.sampler, dna, &self.config, on_iteration)?
            }),
        };

        let outcome = SearchOutcome::new(algorithm, motifs, stats)?;
        tracing::info!(
            "{}: score {:.4}, entropie {:.4}, {} améliorations en {} raffinements",
            algorithm,
            outcome.score,
            outcome.entropy,
            outcome.stats.improvements,
            outcome.stats.refinements
        );
        Ok(outcome)
    }
}
