//! Profils de probabilités 4×k avec pseudocomptes de Laplace

use crate::error::{MotifError, Result};
use crate::motif::{column_counts, invalid_character};
use crate::sequence::Nucleotide;
use serde::{Deserialize, Serialize};

/// Matrice de probabilités par position (lignes A, C, G, T; colonnes 0..k)
///
/// Chaque colonne somme à 1 et aucune cellule n'est nulle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    columns: Vec<[f64; 4]>,
}

impl Profile {
    /// Construit le profil d'un ensemble de motifs
    ///
    /// Chaque nucléotide part d'un compte de 1; la division se fait par `t + 4`.
    pub fn build<S: AsRef<str>>(motifs: &[S]) -> Result<Self> {
        let counts = column_counts(motifs)?;
        let total = (motifs.len() + 4) as f64;

        let columns = counts
            .into_iter()
            .map(|column| column.map(|count| count as f64 / total))
            .collect();

        Ok(Self { columns })
    }

    /// Nombre de positions (k)
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Probabilité de `nucleotide` à la position `column`
    pub fn probability(&self, nucleotide: Nucleotide, column: usize) -> Option<f64> {
        self.columns.get(column).map(|c| c[nucleotide.index()])
    }

    /// Distribution A, C, G, T à la position `column`
    pub fn column(&self, column: usize) -> Option<&[f64; 4]> {
        self.columns.get(column)
    }

    /// Produit des probabilités d'un k-mer sous ce profil
    pub fn kmer_probability(&self, kmer: &str) -> Result<f64> {
        if let Some(c) = invalid_character(kmer) {
            return Err(MotifError::InvalidCharacter(c));
        }
        if kmer.len() != self.width() {
            return Err(MotifError::ProfileWidthMismatch {
                profile: self.width(),
                k: kmer.len(),
            });
        }

        kmer.bytes()
            .zip(&self.columns)
            .try_fold(1.0, |prob, (byte, column)| {
                Ok(prob * column[Nucleotide::from_byte(byte)?.index()])
            })
    }

    /// Nucléotide le plus probable à chaque position (premier en cas d'égalité)
    pub fn consensus(&self) -> String {
        self.columns
            .iter()
            .map(|column| {
                let mut best = 0;
                for (i, &p) in column.iter().enumerate() {
                    if p > column[best] {
                        best = i;
                    }
                }
                Nucleotide::ALL[best].as_char()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_motif_profile() {
        let profile = Profile::build(&["ACGT"]).unwrap();
        assert_eq!(profile.width(), 4);

        for (j, expected) in Nucleotide::ALL.iter().enumerate() {
            for n in Nucleotide::ALL {
                let p = profile.probability(n, j).unwrap();
                if n == *expected {
                    assert!((p - 0.4).abs() < 1e-12);
                } else {
                    assert!((p - 0.2).abs() < 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_profile_counts() {
        let profile = Profile::build(&["AA", "AC", "AG"]).unwrap();
        // colonne 0: A=4, C=G=T=1 sur 7
        assert!((profile.probability(Nucleotide::A, 0).unwrap() - 4.0 / 7.0).abs() < 1e-12);
        assert!((profile.probability(Nucleotide::T, 0).unwrap() - 1.0 / 7.0).abs() < 1e-12);
        assert_eq!(profile.probability(Nucleotide::C, 1), Some(2.0 / 7.0));
        assert_eq!(profile.probability(Nucleotide::C, 2), None);
    }

    #[test]
    fn test_build_is_deterministic() {
        let motifs = ["ACGTTGCA", "ACGGTGCA", "TCGTTGAA"];
        let first = Profile::build(&motifs).unwrap();
        let second = Profile::build(&motifs).unwrap();

        for j in 0..first.width() {
            let a = first.column(j).unwrap();
            let b = second.column(j).unwrap();
            for i in 0..4 {
                assert_eq!(a[i].to_bits(), b[i].to_bits());
            }
        }
    }

    #[test]
    fn test_build_errors() {
        assert!(matches!(
            Profile::build(&["ACGU"]),
            Err(MotifError::InvalidCharacter('U'))
        ));
        assert!(matches!(
            Profile::build::<&str>(&[]),
            Err(MotifError::EmptyMotifSet)
        ));
    }

    #[test]
    fn test_kmer_probability() {
        let profile = Profile::build(&["AC"]).unwrap();
        let p = profile.kmer_probability("AC").unwrap();
        assert!((p - 0.16).abs() < 1e-12);
        assert!(profile.kmer_probability("ACG").is_err());
        // alphabet strict: pas de normalisation des minuscules
        assert!(matches!(
            profile.kmer_probability("ac"),
            Err(MotifError::InvalidCharacter('a'))
        ));
    }

    #[test]
    fn test_consensus() {
        let profile = Profile::build(&["ACGT", "ACGA", "TCGA"]).unwrap();
        assert_eq!(profile.consensus(), "ACGA");
    }

    fn motif_sets() -> impl Strategy<Value = Vec<String>> {
        (1..=12usize, 1..=10usize).prop_flat_map(|(k, t)| {
            proptest::collection::vec(
                proptest::collection::vec(prop_oneof![Just('A'), Just('C'), Just('G'), Just('T')], k)
                    .prop_map(|chars| chars.into_iter().collect::<String>()),
                t,
            )
        })
    }

    proptest! {
        #[test]
        fn columns_are_distributions(motifs in motif_sets()) {
            let profile = Profile::build(&motifs).unwrap();
            prop_assert_eq!(profile.width(), motifs[0].len());

            for j in 0..profile.width() {
                let column = profile.column(j).unwrap();
                let sum: f64 = column.iter().sum();
                prop_assert!((sum - 1.0).abs() < 1e-9);
                prop_assert!(column.iter().all(|&p| p > 0.0 && p < 1.0));
            }
        }
    }
}
