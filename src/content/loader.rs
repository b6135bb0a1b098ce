//! Reads levels.ron and gameplay_defaults.ron from disk.

use ron::Options;
use ron::extensions::Extensions;
use serde::de::DeserializeOwned;
use std::fmt;
use std::path::Path;

use super::data::{DataFile, GameplayDefaults, LevelDef};
use super::registry::ContentRegistry;

const LEVELS_FILE: &str = "levels.ron";
const DEFAULTS_FILE: &str = "gameplay_defaults.ron";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStage {
    Read,
    Parse,
}

/// A content file that could not be used.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub stage: LoadStage,
    pub message: String,
}

impl fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self.stage {
            LoadStage::Read => "read",
            LoadStage::Parse => "parse",
        };
        write!(f, "{} ({} failed): {}", self.file, stage, self.message)
    }
}

fn parse<T: DeserializeOwned>(contents: &str, file_name: &str) -> Result<T, ContentLoadError> {
    // Lets optional fields be written without Some(..)
    Options::default()
        .with_default_extension(Extensions::IMPLICIT_SOME)
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file_name.to_string(),
            stage: LoadStage::Parse,
            message: e.to_string(),
        })
}

/// Parse a `DataFile` list and return its items.
pub fn parse_data_file<T: DeserializeOwned>(
    contents: &str,
    file_name: &str,
) -> Result<Vec<T>, ContentLoadError> {
    parse::<DataFile<T>>(contents, file_name).map(|file| file.items)
}

/// Parse a file holding one bare struct.
pub fn parse_single_file<T: DeserializeOwned>(
    contents: &str,
    file_name: &str,
) -> Result<T, ContentLoadError> {
    parse(contents, file_name)
}

fn load_file<T>(
    path: &Path,
    parse_contents: impl FnOnce(&str, &str) -> Result<T, ContentLoadError>,
) -> Result<T, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = std::fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        stage: LoadStage::Read,
        message: e.to_string(),
    })?;
    parse_contents(&contents, &file_name)
}

/// Load both content files from `base_path`. Either file failing fails the
/// whole load, and every failure is returned.
pub fn load_all_content(
    base_path: &Path,
) -> Result<(ContentRegistry, GameplayDefaults), Vec<ContentLoadError>> {
    let levels = load_file(&base_path.join(LEVELS_FILE), parse_data_file::<LevelDef>);
    let defaults = load_file(
        &base_path.join(DEFAULTS_FILE),
        parse_single_file::<GameplayDefaults>,
    );

    match (levels, defaults) {
        (Ok(levels), Ok(defaults)) => {
            let mut registry = ContentRegistry::default();
            for level in levels {
                registry.insert_level(level);
            }
            Ok((registry, defaults))
        }
        (levels, defaults) => Err(levels.err().into_iter().chain(defaults.err()).collect()),
    }
}
