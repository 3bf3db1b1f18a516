//! Ensembles de motifs (un k-mer par séquence)

use crate::error::{MotifError, Result};
use crate::profile::Profile;
use crate::score;
use crate::sequence::Nucleotide;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ensemble ordonné de k-mers, un par séquence d'entrée
///
/// Valeur immuable: chaque raffinement produit un nouvel ensemble.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MotifSet {
    motifs: Vec<String>,
    k: usize,
}

impl MotifSet {
    /// Crée un ensemble après validation (non vide, longueurs égales, alphabet ACGT)
    pub fn new<S: Into<String>>(motifs: Vec<S>) -> Result<Self> {
        let motifs: Vec<String> = motifs.into_iter().map(Into::into).collect();
        let k = validate(&motifs)?;
        Ok(Self { motifs, k })
    }

    /// Longueur commune des motifs
    pub fn k(&self) -> usize {
        self.k
    }

    /// Nombre de motifs (t)
    pub fn len(&self) -> usize {
        self.motifs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motifs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.motifs.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.motifs.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.motifs
    }

    /// Nouvel ensemble où le motif `index` est remplacé
    pub fn with_replaced(&self, index: usize, motif: &str) -> Result<Self> {
        let mut motifs = self.motifs.clone();
        match motifs.get_mut(index) {
            Some(slot) => *slot = motif.to_string(),
            None => {
                return Err(MotifError::IndexOutOfRange {
                    index,
                    len: self.len(),
                })
            }
        }
        Self::new(motifs)
    }

    /// Motifs de toutes les séquences sauf `index`
    pub fn without(&self, index: usize) -> Vec<&str> {
        self.iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, m)| m)
            .collect()
    }

    pub fn profile(&self) -> Result<Profile> {
        Profile::build(self.as_slice())
    }

    pub fn score(&self) -> Result<f64> {
        score::score(self.as_slice())
    }

    pub fn entropy(&self) -> Result<f64> {
        score::entropy(self.as_slice())
    }

    pub fn information_content(&self) -> Result<f64> {
        score::information_content(self.as_slice())
    }
}

impl fmt::Display for MotifSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.motifs.join(", "))
    }
}

/// Vérifie un ensemble de motifs et retourne leur longueur commune
pub(crate) fn validate<S: AsRef<str>>(motifs: &[S]) -> Result<usize> {
    let k = match motifs.first() {
        Some(first) => first.as_ref().len(),
        None => return Err(MotifError::EmptyMotifSet),
    };
    if k == 0 {
        return Err(MotifError::EmptyMotifSet);
    }

    for motif in motifs {
        let motif = motif.as_ref();
        if motif.is_empty() {
            return Err(MotifError::EmptyMotifSet);
        }
        if let Some(c) = invalid_character(motif) {
            return Err(MotifError::InvalidCharacter(c));
        }
        if motif.len() != k {
            return Err(MotifError::MotifLengthMismatch {
                expected: k,
                actual: motif.len(),
            });
        }
    }

    Ok(k)
}

/// Premier caractère hors de l'alphabet strict A, C, G, T
pub(crate) fn invalid_character(s: &str) -> Option<char> {
    s.chars().find(|&c| !matches!(c, 'A' | 'C' | 'G' | 'T'))
}

/// Comptes par colonne avec pseudocomptes de Laplace (1 par nucléotide)
pub(crate) fn column_counts<S: AsRef<str>>(motifs: &[S]) -> Result<Vec<[usize; 4]>> {
    let k = validate(motifs)?;
    let mut counts = vec![[1usize; 4]; k];

    for motif in motifs {
        for (column, byte) in counts.iter_mut().zip(motif.as_ref().bytes()) {
            column[Nucleotide::from_byte(byte)?.index()] += 1;
        }
    }

    Ok(counts)
}
