//! Score entropique et entropie moyenne d'un ensemble de motifs
//!
//! Le score minimisé par les recherches est la somme des entropies de colonne:
//! plus il est bas, plus les motifs sont conservés. L'information (2 - H par
//! colonne) est son complément à `2k`.

use crate::error::Result;
use crate::motif::column_counts;

/// Entropie maximale d'une colonne à 4 symboles (bits)
pub const MAX_COLUMN_ENTROPY: f64 = 2.0;

/// Entropie de Shannon (bits) de chaque colonne, pseudocomptes inclus
pub fn column_entropies<S: AsRef<str>>(motifs: &[S]) -> Result<Vec<f64>> {
    let total = (motifs.len() + 4) as f64;

    Ok(column_counts(motifs)?
        .iter()
        .map(|counts| {
            counts
                .iter()
                .map(|&c| {
                    let p = c as f64 / total;
                    -p * p.log2()
                })
                .sum::<f64>()
        })
        .collect())
}

/// Score d'un ensemble de motifs: somme des entropies de colonne
pub fn score<S: AsRef<str>>(motifs: &[S]) -> Result<f64> {
    Ok(column_entropies(motifs)?.iter().sum())
}

/// Somme des `2 - H` par colonne
pub fn information_content<S: AsRef<str>>(motifs: &[S]) -> Result<f64> {
    Ok(column_entropies(motifs)?
        .iter()
        .map(|h| MAX_COLUMN_ENTROPY - h)
        .sum())
}

/// Entropie moyenne par position
pub fn entropy<S: AsRef<str>>(motifs: &[S]) -> Result<f64> {
    let entropies = column_entropies(motifs)?;
    Ok(entropies.iter().sum::<f64>() / entropies.len() as f64)
}
