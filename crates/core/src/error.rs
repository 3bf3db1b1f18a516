//! Types d'erreurs pour la recherche de motifs

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MotifError {
    #[error("Fichier d'entrée introuvable: {}", .0.display())]
    InputFileNotFound(PathBuf),

    #[error("Séquence {index} trop courte: {len} < k={k}")]
    SequenceTooShort { index: usize, len: usize, k: usize },

    #[error("Ensemble de motifs vide ou motif de longueur nulle")]
    EmptyMotifSet,

    #[error("Nucléotide invalide: {0:?}")]
    InvalidCharacter(char),

    #[error("Longueurs de motifs incohérentes: attendu {expected}, obtenu {actual}")]
    MotifLengthMismatch { expected: usize, actual: usize },

    #[error("Largeur de profil incohérente: profil {profile}, k={k}")]
    ProfileWidthMismatch { profile: usize, k: usize },

    #[error("Indice {index} hors limites ({len} motifs)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Aucune séquence disponible")]
    EmptySequenceSet,

    #[error("Séquences insuffisantes: besoin de {need}, avons {have}")]
    NotEnoughSequences { need: usize, have: usize },

    #[error("Configuration invalide: {0}")]
    InvalidConfig(String),

    #[error("Erreur IO: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MotifError>;
