//! Sous-commandes de la CLI

pub mod search;
