//! Motif Core Library
//!
//! Découverte stochastique de motifs dans des collections de séquences ADN:
//! profils à pseudocomptes, score entropique, recherche randomisée et
//! échantillonnage de Gibbs.

pub mod config;
pub mod error;
pub mod kmer;
pub mod logging;
pub mod motif;
pub mod profile;
pub mod sampler;
pub mod score;
pub mod search;
pub mod sequence;

// Réexportations principales
pub use config::{GibbsMode, SearchAlgorithm, SearchConfig};
pub use error::{MotifError, Result};
pub use kmer::{most_probable_kmer, most_probable_kmers};
pub use logging::init_logging;
// La macro log_operation est automatiquement exportée à la racine du crate
pub use motif::MotifSet;
pub use profile::Profile;
pub use sampler::RandomSampler;
pub use score::{entropy, information_content, score};
pub use search::{MotifSearch, SearchOutcome, SearchStats};
pub use sequence::{DnaSequence, FileSource, Nucleotide, SequenceSet, SequenceSource};
