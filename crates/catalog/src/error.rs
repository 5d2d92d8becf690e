use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Sector not found: {0}")]
    NotFound(String),

    #[error("Duplicate sector identifier in catalog: {0}")]
    DuplicateSector(String),

    #[error("Catalog entry #{0} has an empty identifier")]
    EmptyIdentifier(usize),

    #[error("Catalog contains no sectors")]
    Empty,
}
