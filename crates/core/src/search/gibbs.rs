//! Échantillonnage de Gibbs
//!
//! À chaque itération, un indice est éliminé, le profil est construit sur les
//! autres motifs et le motif éliminé est remplacé par le k-mer le plus probable
//! de sa séquence. [`GibbsMode`] décide de l'ensemble de départ de l'itération:
//! nouveau tirage complet, ou ensemble de l'itération précédente.

use super::SearchStats;
use crate::config::{GibbsMode, SearchConfig};
use crate::error::{MotifError, Result};
use crate::kmer::most_probable_kmer;
use crate::motif::MotifSet;
use crate::profile::Profile;
use crate::sampler::RandomSampler;
use crate::sequence::SequenceSet;
use rand::Rng;
use tracing::debug;

/// Nombre minimal de séquences: le profil exclut la séquence rééchantillonnée
pub const MIN_SEQUENCES: usize = 2;

/// Exécute exactement `config.max_iterations` itérations
pub fn search<R, F>(
    sampler: &mut RandomSampler<R>,
    dna: &SequenceSet,
    config: &SearchConfig,
    mut on_iteration: F,
) -> Result<(MotifSet, SearchStats)>
where
    R: Rng,
    F: FnMut(usize),
{
    if dna.len() < MIN_SEQUENCES {
        return Err(MotifError::NotEnoughSequences {
            need: MIN_SEQUENCES,
            have: dna.len(),
        });
    }

    let k = config.k;
    let mut stats = SearchStats::default();

    let mut motifs = sampler.random_kmer_set(dna, k)?;
    let mut best = motifs.clone();
    let mut best_score = best.score()?;

    for iteration in 0..config.max_iterations {
        if config.gibbs_mode == GibbsMode::FreshDraw {
            motifs = sampler.random_kmer_set(dna, k)?;
        }

        let eliminated = sampler.random_sequence_index(dna)?;
        let profile = Profile::build(&motifs.without(eliminated))?;
        let sequence = &dna.as_slice()[eliminated];
        let kmer = most_probable_kmer(sequence.as_str(), k, &profile)?;

        motifs = motifs.with_replaced(eliminated, kmer)?;
        stats.refinements += 1;

        let score = motifs.score()?;
        if score < best_score {
            debug!(
                "Itération {}: séquence {} rééchantillonnée, score {:.4} -> {:.4}",
                iteration, eliminated, best_score, score
            );
            best = motifs.clone();
            best_score = score;
            stats.improvements += 1;
        }

        stats.iterations += 1;
        on_iteration(iteration);
    }

    Ok((best, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sampler(seed: u64) -> RandomSampler<ChaCha8Rng> {
        RandomSampler::new(ChaCha8Rng::seed_from_u64(seed))
    }

    #[test]
    fn test_requires_two_sequences() {
        let dna = SequenceSet::from_lines(["ACGTACGT"]).unwrap();
        let config = SearchConfig::gibbs().with_k(4);
        assert!(matches!(
            search(&mut sampler(1), &dna, &config, |_| {}),
            Err(MotifError::NotEnoughSequences { need: 2, have: 1 })
        ));
    }

    #[test]
    fn test_all_a_converges() {
        let dna = SequenceSet::from_lines(["AAAAAAAAAA", "AAAAAAAAAA"]).unwrap();
        for mode in [GibbsMode::FreshDraw, GibbsMode::CarryForward] {
            let config = SearchConfig::gibbs()
                .with_k(5)
                .with_max_iterations(50)
                .with_gibbs_mode(mode);
            let (best, stats) = search(&mut sampler(5), &dna, &config, |_| {}).unwrap();

            assert_eq!(best.as_slice(), ["AAAAA", "AAAAA"]);
            assert_eq!(stats.iterations, 50);
            assert_eq!(stats.refinements, 50);
            assert_eq!(stats.improvements, 0);
        }
    }

    #[test]
    fn test_finds_planted_motif() {
        // deux fenêtres par séquence; GGGG est la seule colonne entièrement conservée
        let dna = SequenceSet::from_lines(["GGGGT", "AGGGG", "GGGGC"]).unwrap();
        for mode in [GibbsMode::FreshDraw, GibbsMode::CarryForward] {
            let config = SearchConfig::gibbs()
                .with_k(4)
                .with_max_iterations(300)
                .with_gibbs_mode(mode);
            let (best, _) = search(&mut sampler(8), &dna, &config, |_| {}).unwrap();
            assert_eq!(best.as_slice(), ["GGGG", "GGGG", "GGGG"]);
        }
    }

    #[test]
    fn test_best_comes_from_sequences() {
        let dna = SequenceSet::from_lines(["ACGTTGCATG", "TTGCATGACG", "CATGCATGTT"]).unwrap();
        let config = SearchConfig::gibbs().with_k(4).with_max_iterations(200);
        let (best, stats) = search(&mut sampler(13), &dna, &config, |_| {}).unwrap();

        for (motif, seq) in best.iter().zip(&dna) {
            assert!(seq.as_str().contains(motif));
        }
        assert!(stats.improvements <= stats.iterations);
    }
}
