//! Configuration errors.
//!
//! The engine has no runtime failures: every in-match edge case is a
//! defined no-op. What *can* fail is configuration, checked once when
//! a match is created. In particular, a draft weight table naming a
//! category with no catalog items would otherwise only surface as an
//! unsatisfiable draw at draft time.

use crate::catalog::Category;

/// Error from validating a `MatchConfig` against an `ItemCatalog`.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The draft weight table is empty.
    EmptyDraftTable,
    /// Every draft weight is zero or negative.
    NoDraftableWeight,
    /// A weighted category has no items in the catalog.
    UndraftableCategory(Category),
    /// A capacity that must be at least 1 was zero.
    ZeroCapacity(&'static str),
    /// A dimension or duration that must be positive was not.
    NonPositive(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EmptyDraftTable => {
                write!(f, "draft weight table is empty")
            }
            ConfigError::NoDraftableWeight => {
                write!(f, "draft weight table has no positive weight")
            }
            ConfigError::UndraftableCategory(category) => {
                write!(f, "{category} has a draft weight but no catalog items")
            }
            ConfigError::ZeroCapacity(what) => {
                write!(f, "{what} must be at least 1")
            }
            ConfigError::NonPositive(what) => {
                write!(f, "{what} must be positive")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
