//! Affichage en tableau

use motif_core::{SearchOutcome, SequenceSet};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct MotifRow {
    #[tabled(rename = "Sequence")]
    label: String,
    #[tabled(rename = "Motif")]
    motif: String,
    #[tabled(rename = "Sequence length")]
    length: usize,
}

/// Tableau des motifs suivi des mesures de la recherche
pub fn format_table(dna: &SequenceSet, outcome: &SearchOutcome) -> String {
    let rows: Vec<MotifRow> = dna
        .iter()
        .zip(outcome.motifs.iter())
        .enumerate()
        .map(|(i, (sequence, motif))| MotifRow {
            label: format!("Sequence {}", i + 1),
            motif: motif.to_string(),
            length: sequence.len(),
        })
        .collect();

    format!(
        "{}\n\
         Algorithme           : {}\n\
         Consensus            : {}\n\
         Score                : {:.6}\n\
         Information (bits)   : {:.6}\n\
         Entropie moyenne     : {:.6}\n\
         Itérations           : {}\n\
         Raffinements         : {}\n\
         Améliorations        : {}\n",
        Table::new(rows),
        outcome.algorithm,
        outcome.consensus,
        outcome.score,
        outcome.information_content,
        outcome.entropy,
        outcome.stats.iterations,
        outcome.stats.refinements,
        outcome.stats.improvements,
    )
}
