//! Catalog View - Entry Point

use catalog_view::config::{self, CliOverrides};
use catalog_view::model::{AppError, PageSize};
use catalog_view::shell::{Shell, ShellOptions};
use catalog_view::source::FileSource;
use catalog_view::state::CatalogState;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

/// Catalog View - browse, search, edit and delete products from a JSON catalog
#[derive(Parser, Debug)]
#[command(name = "catalog-view")]
#[command(version)]
#[command(about = "Browse, search, edit and delete products from a JSON catalog")]
pub struct Args {
    /// Path to a JSON array of products
    pub file: PathBuf,

    /// Products per page (must be positive)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Delete without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Start with search query active
    #[arg(short, long)]
    pub search: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            page_size: self
                .page_size
                .and_then(|n| PageSize::new(n as usize).ok()),
            confirm_delete: if self.yes { Some(false) } else { None },
        }
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = config::load_config_with_precedence(args.config.clone())?;
        let merged = config::merge_config(config_file);
        let with_env = config::apply_env_overrides(merged);
        config::apply_cli_overrides(with_env, args.overrides())
    };

    catalog_view::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let mut state = CatalogState::new(config.page_size);
    match FileSource::new(&args.file) {
        Ok(mut source) => {
            let products = source.drain_products();
            info!(
                path = %source.path().display(),
                count = products.len(),
                "Catalog loaded from source"
            );
            state.load(products);
        }
        Err(e) => {
            // The catalog stays empty but usable.
            error!(error = %e, "Failed to load products");
            eprintln!("Failed to load products: {e}");
        }
    }

    if let Some(query) = &args.search {
        state.search(query);
    }

    let mut shell = Shell::new(
        state,
        ShellOptions {
            title_width: config.title_width,
            confirm_delete: config.confirm_delete,
        },
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell.run(&mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["catalog-view", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["catalog-view", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_file_is_required() {
        let result = Args::try_parse_from(["catalog-view"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_file_only_defaults() {
        let args = Args::parse_from(["catalog-view", "products.json"]);
        assert_eq!(args.file, PathBuf::from("products.json"));
        assert_eq!(args.page_size, None);
        assert!(!args.yes);
        assert_eq!(args.search, None);
        assert_eq!(args.config, None);
        assert_eq!(args.overrides(), CliOverrides::default());
    }

    #[test]
    fn test_page_size_short_flag() {
        let args = Args::parse_from(["catalog-view", "p.json", "-p", "4"]);
        assert_eq!(args.page_size, Some(4));
        assert_eq!(args.overrides().page_size.map(PageSize::get), Some(4));
    }

    #[test]
    fn test_page_size_rejects_zero() {
        let result = Args::try_parse_from(["catalog-view", "p.json", "--page-size", "0"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::ValueValidation
        );
    }

    #[test]
    fn test_yes_disables_confirmation() {
        let args = Args::parse_from(["catalog-view", "p.json", "--yes"]);
        assert_eq!(args.overrides().confirm_delete, Some(false));
    }

    #[test]
    fn test_search_long_flag() {
        let args = Args::parse_from(["catalog-view", "p.json", "--search", "jacket"]);
        assert_eq!(args.search, Some("jacket".to_string()));
    }

    #[test]
    fn test_config_path() {
        let args = Args::parse_from(["catalog-view", "p.json", "--config", "/custom/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }
}
