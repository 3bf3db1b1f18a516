//! Rapport texte à disposition fixe

use motif_core::{MotifSet, SequenceSet};
use std::fmt::Write;

const SEPARATOR_WIDTH: usize = 47;

/// Formate le rapport: nombre de séquences, motif retenu par séquence, entropie
pub fn format_report(dna: &SequenceSet, motifs: &MotifSet, entropy: f64) -> String {
    let separator = "-".repeat(SEPARATOR_WIDTH);
    let mut out = String::new();

    // L'écriture dans une String ne peut pas échouer
    let _ = writeln!(out, "Number of sequences available: {}", dna.len());
    let _ = writeln!(out, "{}", separator);
    let _ = writeln!(out, "{:<12} {:<15} {:<20}", "Sequence", "Motif", "Sequence length");
    let _ = writeln!(out, "{}", separator);
    for (i, (sequence, motif)) in dna.iter().zip(motifs.iter()).enumerate() {
        let label = format!("Sequence {}", i + 1);
        let _ = writeln!(out, "{:<12} {:<15} {:<20}", label, motif, sequence.len());
    }
    let _ = writeln!(out, "{}", separator);
    let _ = writeln!(out, "Entropy of the generated motifs: {:?}", entropy);

    out
}
