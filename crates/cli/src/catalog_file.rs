//! Loading a catalog from a YAML file.
//!
//! The file holds a list of products in the same shape as the JSON output of
//! `sc-cli products --json`:
//!
//! ```yaml
//! - id: d1
//!   name: Sukienka Mila – satynowa midi
//!   price: 21900
//!   rating: 4.7
//!   reviews: 128
//!   sizes: [XS, S, M, L]
//!   colors: [czarna]
//!   category: Sukienki
//!   image: https://images.unsplash.com/photo-1541099649105-f69ad21f3246
//! ```

use std::path::Path;

use sebastian_clothes_core::{Catalog, Product};
use tracing::info;

use crate::error::{CliError, Result};

/// Load the catalog at `path`, or the built-in catalog when `path` is `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a product list, or
/// breaks a catalog invariant.
pub fn load(path: Option<&Path>) -> Result<Catalog> {
    let Some(path) = path else {
        return Ok(Catalog::demo());
    };

    let content = std::fs::read_to_string(path).map_err(|source| CliError::CatalogFile {
        path: path.to_path_buf(),
        source,
    })?;
    let products: Vec<Product> =
        serde_yaml::from_str(&content).map_err(|source| CliError::CatalogYaml {
            path: path.to_path_buf(),
            source,
        })?;

    let catalog = Catalog::new(products)?;
    info!(path = %path.display(), products = catalog.len(), "catalog loaded");
    Ok(catalog)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn write(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "sc-cli-catalog-{}-{name}.yaml",
            std::process::id()
        ));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_no_path_is_demo() {
        assert_eq!(load(None).unwrap(), Catalog::demo());
    }

    #[test]
    fn test_load_yaml() {
        let path = write(
            "ok",
            r"
- id: k1
  name: Sukienka Kira – midi
  price: 19900
  old_price: 24900
  rating: 4.1
  reviews: 12
  sizes: [S, M]
  colors: [czarna]
  category: Sukienki
  image: https://images.unsplash.com/photo-1
  tags: [nowość]
- id: k2
  name: Sukienka Ola – mini
  price: 9900
  rating: 3.9
  reviews: 4
  sizes: [XS]
  colors: []
  category: Sukienki
  image: https://images.unsplash.com/photo-2
",
        );

        let catalog = load(Some(&path)).unwrap();
        assert_eq!(catalog.len(), 2);
        let k1 = &catalog.products()[0];
        assert_eq!(k1.discount_percent(), Some(20));
        assert_eq!(k1.tags, vec!["nowość".to_string()]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let product = "
- id: k1
  name: A
  price: 100
  rating: 4
  reviews: 1
  sizes: [S]
  colors: []
  category: Sukienki
  image: img
";
        let path = write("dup", &format!("{product}{}", product.trim_start_matches('\n')));
        assert!(matches!(load(Some(&path)), Err(CliError::Catalog(_))));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("sc-cli-catalog-does-not-exist.yaml");
        assert!(matches!(
            load(Some(&path)),
            Err(CliError::CatalogFile { .. })
        ));
    }

    #[test]
    fn test_not_a_list() {
        let path = write("bad", "id: k1\n");
        assert!(matches!(
            load(Some(&path)),
            Err(CliError::CatalogYaml { .. })
        ));
    }
}
