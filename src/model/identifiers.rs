//! Identifier and sizing newtypes with smart constructors.

use serde::Deserialize;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// Opaque identifier for a catalog product.
///
/// The source supplies integer ids. Every comparison in the crate goes
/// through the derived `PartialEq`; there is no coercion between textual
/// and numeric forms. Text entering from the shell is parsed with
/// [`FromStr`] before it is ever compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Wrap a raw numeric id.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

/// Number of products added to the page window per "load more".
///
/// Never zero, including when deserialized from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "usize")]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Page size used when nothing else is configured.
    pub const DEFAULT: PageSize = match NonZeroUsize::new(8) {
        Some(n) => PageSize(n),
        None => unreachable!(),
    };

    /// Smart constructor: rejects zero.
    pub fn new(raw: usize) -> Result<Self, InvalidPageSize> {
        NonZeroUsize::new(raw)
            .map(Self)
            .ok_or(InvalidPageSize::Zero)
    }

    /// The page size as a plain `usize`.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for PageSize {
    type Error = InvalidPageSize;

    fn try_from(raw: usize) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ===== Error Types =====

/// Rejected page size.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPageSize {
    /// A page must hold at least one product.
    #[error("Page size cannot be zero")]
    Zero,
}

// ===== Tests =====
