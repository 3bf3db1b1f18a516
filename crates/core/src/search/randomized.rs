//! Recherche randomisée avec redémarrages aléatoires
//!
//! Chaque itération externe part d'un tirage aléatoire puis raffine
//! (profil → k-mers les plus probables) tant que le meilleur score global
//! s'améliore. Le compteur de stagnation n'est remis à zéro que par une
//! amélioration: il survit aux redémarrages, comme le meilleur ensemble.

use super::SearchStats;
use crate::config::SearchConfig;
use crate::error::Result;
use crate::kmer::most_probable_kmers;
use crate::motif::MotifSet;
use crate::sampler::RandomSampler;
use crate::sequence::SequenceSet;
use rand::Rng;
use tracing::debug;

/// Exécute exactement `config.max_iterations` itérations externes
///
/// La boucle interne n'est pas bornée: elle s'arrête dès que le compteur de
/// stagnation atteint `config.restart_threshold` sans amélioration.
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
    let k = config.k;
    let mut stats = SearchStats::default();

    let mut best = sampler.random_kmer_set(dna, k)?;
    let mut best_score = best.score()?;
    let mut stagnation = 0;

    for iteration in 0..config.max_iterations {
        let mut motifs = sampler.random_kmer_set(dna, k)?;

        loop {
            let profile = motifs.profile()?;
            let candidate = most_probable_kmers(dna, &profile)?;
            let score = candidate.score()?;
            stats.refinements += 1;

            if score < best_score {
                debug!("Itération {}: score {:.4} -> {:.4}", iteration, best_score, score);
                best = candidate.clone();
                best_score = score;
                stagnation = 0;
                stats.improvements += 1;
            } else if stagnation >= config.restart_threshold {
                debug!("Itération {}: redémarrage après {} raffinements stériles", iteration, stagnation);
                break;
            } else {
                stagnation += 1;
            }

            motifs = candidate;
        }

        stats.iterations += 1;
        on_iteration(iteration);
    }

    Ok((best, stats))
}
