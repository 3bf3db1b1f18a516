//! Mise en forme des résultats

pub mod report;
pub mod table;
