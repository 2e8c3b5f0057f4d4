use crate::domain::{EvrecError, EvrecResult, PlaceholderRole};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::LazyLock;

// Token shape produced by the upstream extraction step:
// `<<ROLE_NN: free text>>`. Role and zero-padded index must match exactly;
// only the trailing description is wildcarded.
static TOKEN_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<<([A-Z]+)_(\d{2}):([^>]*)>>$").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
struct PlaceholderMap(BTreeMap<String, String>);

/// Persisted token -> value mapping. Tokens are opaque keys emitted by the
/// document-extraction collaborator; this store only looks them up
/// structurally and never invents new ones, so the key set on disk is
/// identical before and after a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderStore {
    entries: PlaceholderMap,
}

impl PlaceholderStore {
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: PlaceholderMap(
                entries
                    .into_iter()
                    .map(|(token, value)| (token.into(), value.into()))
                    .collect(),
            ),
        }
    }

    /// Load the store from disk. A missing file is an empty map; an
    /// unreadable or malformed file is fatal before anything is written.
    pub fn load(path: &Path) -> EvrecResult<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(source) if source.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(EvrecError::io_system(
                    "IO.PLACEHOLDER_READ",
                    format!(
                        "failed to read placeholder store '{}': {}",
                        path.display(),
                        source
                    ),
                ));
            }
        };

        let entries = serde_json::from_str::<PlaceholderMap>(&content).map_err(|source| {
            EvrecError::input_validation(
                "INPUT.PLACEHOLDER_JSON",
                format!(
                    "failed to parse placeholder store '{}': {}",
                    path.display(),
                    source
                ),
            )
        })?;

        Ok(Self { entries })
    }

    /// Resolve the token for a (role, slot) pair, or `None` when the store
    /// holds no such token. Keys iterate in sorted order, so a duplicate pair
    /// (an upstream construction defect) resolves deterministically.
    pub fn find(&self, role: PlaceholderRole, slot: usize) -> Option<&str> {
        self.entries
            .0
            .keys()
            .find(|key| token_matches(key, role, slot))
            .map(String::as_str)
    }

    pub fn upsert(&mut self, token: &str, value: impl Into<String>) {
        self.entries.0.insert(token.to_owned(), value.into());
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.0.get(token).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.0.is_empty()
    }

    /// Rewrite the store in full: pretty-printed UTF-8 with a trailing
    /// newline. Values untouched by the run survive unchanged.
    pub fn persist(&self, path: &Path) -> EvrecResult<()> {
        let mut payload = serde_json::to_string_pretty(&self.entries).map_err(|source| {
            EvrecError::internal(
                "SYS.PLACEHOLDER_ENCODE",
                format!("failed to encode placeholder store: {}", source),
            )
        })?;
        payload.push('\n');

        fs::write(path, payload).map_err(|source| {
            EvrecError::io_system(
                "IO.PLACEHOLDER_WRITE",
                format!(
                    "failed to write placeholder store '{}': {}",
                    path.display(),
                    source
                ),
            )
        })
    }
}

fn token_matches(key: &str, role: PlaceholderRole, slot: usize) -> bool {
    TOKEN_SHAPE.captures(key).is_some_and(|captures| {
        &captures[1] == role.as_str()
            && captures[2].parse::<usize>().is_ok_and(|index| index == slot)
    })
}
