//! Séquences ADN et collections de séquences

use crate::error::{MotifError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

/// Nucléotides standards, dans l'ordre des lignes du profil
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
}

impl Nucleotide {
    /// Les quatre nucléotides, ordre A, C, G, T
    pub const ALL: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

    /// Convertit un caractère en nucléotide (insensible à la casse)
    pub fn from_char(c: char) -> Result<Self> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Nucleotide::A),
            'C' => Ok(Nucleotide::C),
            'G' => Ok(Nucleotide::G),
            'T' => Ok(Nucleotide::T),
            _ => Err(MotifError::InvalidCharacter(c)),
        }
    }

    /// Convertit un octet ASCII en nucléotide
    pub fn from_byte(b: u8) -> Result<Self> {
        Self::from_char(b as char)
    }

    /// Convertit un nucléotide en caractère
    pub fn as_char(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
        }
    }

    /// Ligne correspondante dans un profil
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Nucleotide {
    type Error = MotifError;

    fn try_from(c: char) -> Result<Self> {
        Nucleotide::from_char(c)
    }
}

/// Séquence ADN immuable sur l'alphabet {A,C,G,T}
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DnaSequence(String);

impl DnaSequence {
    /// Parse une séquence; les minuscules sont normalisées
    pub fn parse(s: &str) -> Result<Self> {
        let bases = s
            .chars()
            .map(|c| Nucleotide::from_char(c).map(Nucleotide::as_char))
            .collect::<Result<String>>()?;
        Ok(Self(bases))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Retourne la longueur de la séquence
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Vérifie si la séquence est vide
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Nombre de fenêtres de longueur `k` (0 si la séquence est trop courte)
    pub fn window_count(&self, k: usize) -> usize {
        if k > self.len() {
            0
        } else {
            self.len() - k + 1
        }
    }

    /// k-mer commençant à `start`
    pub fn kmer(&self, start: usize, k: usize) -> &str {
        &self.0[start..start + k]
    }
}

impl fmt::Display for DnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DnaSequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Collection ordonnée de séquences (l'ensemble "dna")
///
/// L'index `i` correspond à "Sequence i+1" dans les rapports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceSet {
    sequences: Vec<DnaSequence>,
}

impl SequenceSet {
    pub fn new(sequences: Vec<DnaSequence>) -> Self {
        Self { sequences }
    }

    /// Construit une collection à partir de lignes de texte
    ///
    /// Les espaces autour de chaque ligne sont retirés, les lignes vides ignorées.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sequences = lines
            .into_iter()
            .filter_map(|line| {
                let line = line.as_ref().trim();
                (!line.is_empty()).then(|| DnaSequence::parse(line))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { sequences })
    }

    /// Lit un fichier contenant une séquence par ligne
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => MotifError::InputFileNotFound(path.to_path_buf()),
            _ => MotifError::Io(e),
        })?;

        let lines = BufReader::new(file).lines().collect::<std::io::Result<Vec<_>>>()?;
        let set = Self::from_lines(lines)?;
        tracing::debug!("{} séquences lues depuis {}", set.len(), path.display());
        Ok(set)
    }

    /// Vérifie que chaque séquence admet au moins une fenêtre de longueur `k`
    pub fn validate_for(&self, k: usize) -> Result<()> {
        if self.sequences.is_empty() {
            return Err(MotifError::EmptySequenceSet);
        }
        match self.sequences.iter().position(|s| s.len() < k) {
            Some(index) => Err(MotifError::SequenceTooShort {
                index,
                len: self.sequences[index].len(),
                k,
            }),
            None => Ok(()),
        }
    }

    /// Longueur de la plus courte séquence
    pub fn min_len(&self) -> Option<usize> {
        self.sequences.iter().map(DnaSequence::len).min()
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DnaSequence> {
        self.sequences.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DnaSequence> {
        self.sequences.iter()
    }

    pub fn as_slice(&self) -> &[DnaSequence] {
        &self.sequences
    }
}

impl<'a> IntoIterator for &'a SequenceSet {
    type Item = &'a DnaSequence;
    type IntoIter = std::slice::Iter<'a, DnaSequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sequences.iter()
    }
}

/// Fournisseur de séquences pour une recherche
pub trait SequenceSource {
    fn load(&self) -> Result<SequenceSet>;
}

/// Fichier texte, une séquence par ligne
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SequenceSource for FileSource {
    fn load(&self) -> Result<SequenceSet> {
        SequenceSet::from_file(&self.path)
    }
}

impl SequenceSource for SequenceSet {
    fn load(&self) -> Result<SequenceSet> {
        Ok(self.clone())
    }
}
