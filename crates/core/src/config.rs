//! Configuration d'une recherche de motifs

use crate::error::{MotifError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Algorithme de recherche
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchAlgorithm {
    /// Recherche randomisée avec redémarrages
    Randomized,
    /// Échantillonnage de Gibbs
    Gibbs,
}

impl Default for SearchAlgorithm {
    fn default() -> Self {
        Self::Randomized
    }
}

impl std::fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Randomized => f.write_str("randomized"),
            Self::Gibbs => f.write_str("gibbs"),
        }
    }
}

/// Construction de l'ensemble de travail à chaque itération de Gibbs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GibbsMode {
    /// Nouveau tirage aléatoire complet à chaque itération
    FreshDraw,
    /// L'ensemble de l'itération précédente est conservé; seul le motif éliminé change
    CarryForward,
}

impl Default for GibbsMode {
    fn default() -> Self {
        Self::FreshDraw
    }
}

/// Configuration de la recherche
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Algorithme utilisé
    pub algorithm: SearchAlgorithm,

    /// Longueur des motifs
    pub k: usize,

    /// Itérations externes (randomisée) ou nombre d'itérations de Gibbs
    pub max_iterations: usize,

    /// Raffinements sans amélioration tolérés avant redémarrage
    pub restart_threshold: usize,

    /// Variante de Gibbs
    pub gibbs_mode: GibbsMode,

    /// Seed du générateur (entropie système si absent)
    pub seed: Option<u64>,

    /// Fichier de séquences, une par ligne
    pub input: Option<PathBuf>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::randomized()
    }
}

impl SearchConfig {
    /// Paramètres par défaut de la recherche randomisée
    pub fn randomized() -> Self {
        Self {
            algorithm: SearchAlgorithm::Randomized,
            k: 10,
            max_iterations: 10,
            restart_threshold: 10,
            gibbs_mode: GibbsMode::FreshDraw,
            seed: None,
            input: None,
        }
    }

    /// Paramètres par défaut de l'échantillonnage de Gibbs
    pub fn gibbs() -> Self {
        Self {
            algorithm: SearchAlgorithm::Gibbs,
            max_iterations: 1000,
            ..Self::randomized()
        }
    }

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_restart_threshold(mut self, restart_threshold: usize) -> Self {
        self.restart_threshold = restart_threshold;
        self
    }

    pub fn with_gibbs_mode(mut self, gibbs_mode: GibbsMode) -> Self {
        self.gibbs_mode = gibbs_mode;
        self
    }

    /// Définit le seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Vérifie si la configuration est utilisable
    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(MotifError::InvalidConfig("k doit être > 0".to_string()));
        }
        if self.max_iterations == 0 {
            return Err(MotifError::InvalidConfig(
                "max_iterations doit être > 0".to_string(),
            ));
        }
        Ok(())
    }
}
