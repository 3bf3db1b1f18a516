//! Tirages aléatoires de k-mers et d'indices de séquence

use crate::error::{MotifError, Result};
use crate::motif::MotifSet;
use crate::sequence::SequenceSet;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Échantillonneur uniforme, générique sur la source pseudo-aléatoire
#[derive(Debug, Clone)]
pub struct RandomSampler<R: Rng> {
    rng: R,
}

impl RandomSampler<ChaCha8Rng> {
    /// ChaCha8 initialisé depuis l'entropie du système
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }

    /// ChaCha8 avec seed fixe, pour des tirages reproductibles
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Tire un k-mer uniforme dans chaque séquence
    pub fn random_kmer_set(&mut self, dna: &SequenceSet, k: usize) -> Result<MotifSet> {
        let motifs = dna
            .iter()
            .enumerate()
            .map(|(index, seq)| {
                let windows = seq.window_count(k);
                if windows == 0 {
                    return Err(MotifError::SequenceTooShort {
                        index,
                        len: seq.len(),
                        k,
                    });
                }
                let start = self.rng.gen_range(0..windows);
                Ok(seq.kmer(start, k))
            })
            .collect::<Result<Vec<_>>>()?;

        let set = MotifSet::new(motifs).map_err(|e| match e {
            MotifError::EmptyMotifSet if dna.is_empty() => MotifError::EmptySequenceSet,
            other => other,
        })?;
        tracing::trace!("Tirage aléatoire: {}", set);
        Ok(set)
    }

    /// Tire un indice de séquence uniforme dans `0..dna.len()`
    pub fn random_sequence_index(&mut self, dna: &SequenceSet) -> Result<usize> {
        if dna.is_empty() {
            return Err(MotifError::EmptySequenceSet);
        }
        Ok(self.rng.gen_range(0..dna.len()))
    }
}
