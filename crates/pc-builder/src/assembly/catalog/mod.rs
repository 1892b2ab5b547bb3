mod parser;
mod standard;

use super::domain::{Motherboard, Part, PartId, PartKind};
use serde::Serialize;
use std::collections::HashSet;
use std::io::{Read, Write};
use std::path::Path;

/// Errors raised while assembling or importing a part catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("catalog row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },
    #[error("duplicate part id '{0}' in catalog")]
    DuplicatePart(PartId),
    #[error("catalog has no motherboard with a socket and slot layout")]
    MissingMotherboard,
    #[error("catalog lists more than one motherboard ('{first}' and '{second}')")]
    MultipleMotherboards { first: PartId, second: PartId },
}

/// Immutable reference data: every part plus the board they are checked against.
#[derive(Debug, Clone)]
pub struct PartCatalog {
    parts: Vec<Part>,
    motherboard: Motherboard,
}

impl PartCatalog {
    /// Validate a list of parts into a catalog. Exactly one motherboard is required.
    pub fn new(parts: Vec<Part>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for part in &parts {
            if !seen.insert(part.id.clone()) {
                return Err(CatalogError::DuplicatePart(part.id.clone()));
            }
        }

        let mut boards = parts
            .iter()
            .filter(|part| part.kind == PartKind::Motherboard);
        let board = boards.next().ok_or(CatalogError::MissingMotherboard)?;
        if let Some(second) = boards.next() {
            return Err(CatalogError::MultipleMotherboards {
                first: board.id.clone(),
                second: second.id.clone(),
            });
        }
        let motherboard = Motherboard::from_part(board).ok_or(CatalogError::MissingMotherboard)?;

        Ok(Self { parts, motherboard })
    }

    /// The built-in AM4 teaching catalog.
    pub fn standard() -> Self {
        let motherboard = standard::standard_motherboard();
        let parts = standard::standard_parts(&motherboard);
        Self { parts, motherboard }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let parts = parser::parse_parts(reader)?;
        Self::new(parts)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Export in the same CSV layout `from_reader` accepts.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), CatalogError> {
        parser::write_parts(&self.parts, writer)
    }

    pub fn motherboard(&self) -> &Motherboard {
        &self.motherboard
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn find(&self, id: &PartId) -> Option<&Part> {
        self.parts.iter().find(|part| &part.id == id)
    }

    pub fn of_kind(&self, kind: PartKind) -> impl Iterator<Item = &Part> {
        self.parts.iter().filter(move |part| part.kind == kind)
    }

    /// Installable parts grouped by kind, skipping empty groups and the board itself.
    pub fn library(&self) -> Vec<LibrarySection> {
        PartKind::installable()
            .into_iter()
            .filter_map(|kind| {
                let parts: Vec<Part> = self.of_kind(kind).cloned().collect();
                (!parts.is_empty()).then(|| LibrarySection {
                    kind,
                    label: kind.label(),
                    count: parts.len(),
                    parts,
                })
            })
            .collect()
    }
}

impl Default for PartCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LibrarySection {
    pub kind: PartKind,
    pub label: &'static str,
    pub count: usize,
    pub parts: Vec<Part>,
}
