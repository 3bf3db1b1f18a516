//! Recherche du k-mer le plus probable sous un profil

use crate::error::{MotifError, Result};
use crate::motif::{invalid_character, MotifSet};
use crate::profile::Profile;
use crate::sequence::SequenceSet;

/// Retourne le k-mer de `sequence` de probabilité maximale sous `profile`
///
/// Toutes les positions `0..=len-k` sont évaluées; la comparaison stricte
/// garde la première fenêtre en cas d'égalité.
pub fn most_probable_kmer<'a>(sequence: &'a str, k: usize, profile: &Profile) -> Result<&'a str> {
    if k != profile.width() {
        return Err(MotifError::ProfileWidthMismatch {
            profile: profile.width(),
            k,
        });
    }
    // Les fenêtres sont découpées par octet: l'alphabet doit être validé avant
    if let Some(c) = invalid_character(sequence) {
        return Err(MotifError::InvalidCharacter(c));
    }
    if sequence.len() < k {
        return Err(MotifError::SequenceTooShort {
            index: 0,
            len: sequence.len(),
            k,
        });
    }

    let mut max_prob = -1.0;
    let mut best = 0;
    for start in 0..=sequence.len() - k {
        let prob = profile.kmer_probability(&sequence[start..start + k])?;
        if prob > max_prob {
            max_prob = prob;
            best = start;
        }
    }

    tracing::trace!("k-mer retenu à la position {} (p={:e})", best, max_prob);
    Ok(&sequence[best..best + k])
}

/// Nouvel ensemble de motifs: le k-mer le plus probable de chaque séquence
pub fn most_probable_kmers(dna: &SequenceSet, profile: &Profile) -> Result<MotifSet> {
    let k = profile.width();
    let motifs = dna
        .iter()
        .enumerate()
        .map(|(index, seq)| {
            most_probable_kmer(seq.as_str(), k, profile).map_err(|e| match e {
                MotifError::SequenceTooShort { len, k, .. } => {
                    MotifError::SequenceTooShort { index, len, k }
                }
                other => other,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    MotifSet::new(motifs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_matching_window() {
        let profile = Profile::build(&["GGC", "GGC"]).unwrap();
        assert_eq!(most_probable_kmer("TTAGGCTT", 3, &profile).unwrap(), "GGC");
    }

    #[test]
    fn test_first_window_wins_ties() {
        let profile = Profile::build(&["ACG"]).unwrap();
        // deux occurrences de la même fenêtre: la première doit gagner
        let sequence = "TTACGTTACGT";
        let kmer = most_probable_kmer(sequence, 3, &profile).unwrap();
        assert_eq!(kmer, "ACG");
        assert_eq!(kmer.as_ptr(), sequence[2..].as_ptr());
    }

    #[test]
    fn test_equal_probability_distinct_windows() {
        // Colonnes symétriques: "AC" et "CA" ont la même probabilité
        let profile = Profile::build(&["AC", "CA"]).unwrap();
        let p1 = profile.kmer_probability("AC").unwrap();
        let p2 = profile.kmer_probability("CA").unwrap();
        assert_eq!(p1, p2);

        assert_eq!(most_probable_kmer("GCAC", 2, &profile).unwrap(), "CA");
        assert_eq!(most_probable_kmer("GACA", 2, &profile).unwrap(), "AC");
    }

    #[test]
    fn test_sequence_of_length_k() {
        let profile = Profile::build(&["TTTT"]).unwrap();
        assert_eq!(most_probable_kmer("ACGA", 4, &profile).unwrap(), "ACGA");
    }

    #[test]
    fn test_errors() {
        let profile = Profile::build(&["ACGT"]).unwrap();
        assert!(matches!(
            most_probable_kmer("ACG", 4, &profile),
            Err(MotifError::SequenceTooShort { len: 3, k: 4, .. })
        ));
        assert!(matches!(
            most_probable_kmer("ACGTACGT", 3, &profile),
            Err(MotifError::ProfileWidthMismatch { profile: 4, k: 3 })
        ));
        assert!(matches!(
            most_probable_kmer("ACGNACGT", 4, &profile),
            Err(MotifError::InvalidCharacter('N'))
        ));
    }

    #[test]
    fn test_rejects_non_ascii_and_lowercase() {
        let profile = Profile::build(&["AC"]).unwrap();
        assert!(matches!(
            most_probable_kmer("AéAAA", 2, &profile),
            Err(MotifError::InvalidCharacter('é'))
        ));
        assert!(matches!(
            most_probable_kmer("AAcA", 2, &profile),
            Err(MotifError::InvalidCharacter('c'))
        ));
    }

    #[test]
    fn test_most_probable_kmers() {
        let dna = SequenceSet::from_lines(["TTGGCAA", "GGCTTTT", "AAAAGGC"]).unwrap();
        let profile = Profile::build(&["GGC"]).unwrap();

        let motifs = most_probable_kmers(&dna, &profile).unwrap();
        assert_eq!(motifs.as_slice(), ["GGC", "GGC", "GGC"]);

        let short = SequenceSet::from_lines(["TTGGCAA", "GG"]).unwrap();
        assert!(matches!(
            most_probable_kmers(&short, &profile),
            Err(MotifError::SequenceTooShort { index: 1, len: 2, k: 3 })
        ));
    }
}
