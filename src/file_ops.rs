use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::data::{name_from_stem, Category, CategoryFile, MuscleCatalogFile, MuscleGroup};
use crate::error::{CatalogError, Result};

/// A category file that could not be parsed and was left out of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Every category loaded from the data directory, keyed by display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
    skipped: Vec<SkippedFile>,
}

impl Catalog {
    pub fn names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn skipped(&self) -> &[SkippedFile] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    // A repeated name replaces the earlier entry in place.
    fn insert(&mut self, category: Category) {
        match self.categories.iter_mut().find(|c| c.name == category.name) {
            Some(existing) => {
                debug!("category {:?} overwritten by a later file", category.name);
                *existing = category;
            }
            None => self.categories.push(category),
        }
    }
}

pub(crate) fn read_json_from_file<T: DeserializeOwned>(file_path: &Path) -> Result<T> {
    let file = File::open(file_path).map_err(|e| CatalogError::io(file_path, e))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CatalogError::Malformed {
        path: file_path.to_path_buf(),
        source,
    })
}

fn category_files(directory: &Path, muscle_file_name: &str) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(directory).map_err(|e| CatalogError::io(directory, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| CatalogError::io(directory, e))?.path();
        let is_json = path.extension().is_some_and(|ext| ext == "json");
        let is_muscle_file = path.file_name().is_some_and(|name| name == muscle_file_name);
        if path.is_file() && is_json && !is_muscle_file {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Loads every category file in `directory` in filename order.
///
/// Files that fail to parse are skipped with a warning and listed in
/// [`Catalog::skipped`]; only an unreadable directory fails the whole load.
/// The dedicated muscle catalog (`muscle_file_name`) is left for
/// [`load_muscle_catalog`].
pub fn load_catalog(directory: &Path, muscle_file_name: &str) -> Result<Catalog> {
    let mut catalog = Catalog::default();

    for path in category_files(directory, muscle_file_name)? {
        let fallback_name = path
            .file_stem()
            .map(|stem| name_from_stem(&stem.to_string_lossy()))
            .unwrap_or_default();

        match read_json_from_file::<CategoryFile>(&path) {
            Ok(file) => {
                let category = file.into_category(fallback_name);
                debug!(
                    "loaded category {:?} ({} items) from {}",
                    category.name,
                    category.items.len(),
                    path.display()
                );
                catalog.insert(category);
            }
            Err(err) => {
                warn!("skipping {}: {}", path.display(), err);
                catalog.skipped.push(SkippedFile {
                    path,
                    reason: err.to_string(),
                });
            }
        }
    }

    Ok(catalog)
}

/// Loads the dedicated muscle catalog, or `None` when the file is absent.
pub fn load_muscle_catalog(file_path: &Path) -> Result<Option<Vec<MuscleGroup>>> {
    if !file_path.exists() {
        debug!("no muscle catalog at {}", file_path.display());
        return Ok(None);
    }

    let file: MuscleCatalogFile = read_json_from_file(file_path)?;
    Ok(Some(file.into_groups()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CategoryItems;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) {
        fs::write(dir.path().join(name), contents).unwrap();
    }

    #[test]
    fn missing_category_key_uses_title_cased_stem() {
        let dir = TempDir::new().unwrap();
        write(&dir, "summer_casual.json", r#"{"outfits":[]}"#);

        let catalog = load_catalog(dir.path(), "muscles.json").unwrap();
        assert_eq!(catalog.names(), ["Summer Casual"]);
    }

    #[test]
    fn later_file_wins_on_duplicate_names() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "a_first.json",
            r#"{"category":"Coats","outfits":[{"title":"Old","image":"o.png"}]}"#,
        );
        write(&dir, "b_middle.json", r#"{"category":"Boots"}"#);
        write(
            &dir,
            "c_last.json",
            r#"{"category":"Coats","outfits":[{"title":"New","image":"n.png"}]}"#,
        );

        let catalog = load_catalog(dir.path(), "muscles.json").unwrap();
        assert_eq!(catalog.names(), ["Coats", "Boots"]);

        let coats = catalog.get("Coats").unwrap();
        match &coats.items {
            CategoryItems::Outfits(outfits) => {
                assert_eq!(outfits.len(), 1);
                assert_eq!(outfits[0].title, "New");
            }
            other => panic!("expected outfits, got {:?}", other),
        }
    }

    #[test]
    fn malformed_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        write(&dir, "broken.json", "{ not json");
        write(&dir, "list.json", "[1, 2, 3]");
        write(&dir, "shoes.json", r#"{"outfits":[]}"#);

        let catalog = load_catalog(dir.path(), "muscles.json").unwrap();
        assert_eq!(catalog.names(), ["Shoes"]);
        assert_eq!(catalog.skipped().len(), 2);
        assert!(catalog.skipped()[0].path.ends_with("broken.json"));
        assert!(catalog.skipped()[0].reason.contains("malformed"));
    }

    #[test]
    fn non_json_files_and_muscle_catalog_are_ignored() {
        let dir = TempDir::new().unwrap();
        write(&dir, "notes.txt", "hello");
        write(&dir, "muscles.json", r#"{"muscle_group":"Arms"}"#);
        write(&dir, "hats.json", "{}");

        let catalog = load_catalog(dir.path(), "muscles.json").unwrap();
        assert_eq!(catalog.names(), ["Hats"]);
        assert!(catalog.skipped().is_empty());
    }

    #[test]
    fn loading_twice_is_idempotent() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "jackets.json",
            r#"{"outfits":[{"title":"Bomber","image":"b.png","brands":[{"label":"store a","link":"https://a.example"}]}]}"#,
        );
        write(&dir, "boots.json", r#"{"category":"Boots","folder":"boots"}"#);

        let first = load_catalog(dir.path(), "muscles.json").unwrap();
        let second = load_catalog(dir.path(), "muscles.json").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = load_catalog(&dir.path().join("nope"), "muscles.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn muscle_catalog_is_optional() {
        let dir = TempDir::new().unwrap();
        assert_eq!(load_muscle_catalog(&dir.path().join("muscles.json")).unwrap(), None);

        write(&dir, "muscles.json", r#"{"muscle_group":"Biceps","folder":"biceps"}"#);
        let groups = load_muscle_catalog(&dir.path().join("muscles.json"))
            .unwrap()
            .unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "Biceps");
    }

    #[test]
    fn malformed_muscle_catalog_is_an_error() {
        let dir = TempDir::new().unwrap();
        write(&dir, "muscles.json", r#"{"folder":"no name"}"#);
        let err = load_muscle_catalog(&dir.path().join("muscles.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { .. }));
    }
}
