//! File-based product source.

use crate::model::error::InputError;
use crate::model::Product;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::info;

/// Read-once product file.
///
/// Loads and validates all products on construction; [`FileSource::drain_products`]
/// hands them over exactly once.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    products: Option<Vec<Product>>,
}

impl FileSource {
    /// Open and parse the product file at `path`.
    ///
    /// # Errors
    ///
    /// - `InputError::FileNotFound` if the file does not exist.
    /// - `InputError::Malformed` / `InputError::DuplicateId` for bad content.
    /// - `InputError::Io` for other I/O errors.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path)?;
        let products = super::read_products(BufReader::new(file))?;
        info!(path = %path.display(), count = products.len(), "Product file read");

        Ok(Self {
            path: path.to_path_buf(),
            products: Some(products),
        })
    }

    /// Path the products were read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All products on the first call, empty afterwards.
    pub fn drain_products(&mut self) -> Vec<Product> {
        self.products.take().unwrap_or_default()
    }
}
