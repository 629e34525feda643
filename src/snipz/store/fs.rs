use super::{ScanWarning, SearchResults, SnippetStore, StoreStats};
use crate::codec;
use crate::error::{Result, SnipzError};
use crate::id::{self, ID_LEN};
use crate::model::Snippet;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Flat-file snippet store.
///
/// One encoded record per line, appended on add. Remove renames the live
/// file to a `.old` sibling (replacing any previous backup) and writes a
/// fresh file with the surviving lines — the previous version is always
/// recoverable even though the rewrite itself is not atomic.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// The backing path is a constructor parameter so multiple stores (e.g.
    /// in tests) can coexist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling path holding the pre-rewrite snapshot.
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".old");
        PathBuf::from(name)
    }

    /// Reads all lines; a missing file is a propagated error. Used by the
    /// operations that require the store to exist (get, remove).
    fn read_lines(&self) -> Result<Vec<String>> {
        let text = fs::read_to_string(&self.path)?;
        Ok(text.lines().map(str::to_string).collect())
    }

    /// Reads all lines, treating a missing file as an empty store. Used by
    /// the scan operations (add's duplicate check, search, stats).
    fn read_lines_or_empty(&self) -> Result<Vec<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(text.lines().map(str::to_string).collect()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Decodes every line, collecting malformed ones as warnings instead of
    /// aborting the scan.
    fn scan(&self) -> Result<(Vec<Snippet>, Vec<ScanWarning>)> {
        let mut snippets = Vec::new();
        let mut warnings = Vec::new();
        for (number, line) in self.read_lines_or_empty()?.iter().enumerate() {
            match codec::decode_line(line) {
                Ok(snippet) => snippets.push(snippet),
                Err(e) => warnings.push(ScanWarning {
                    line: number + 1,
                    reason: e.to_string(),
                }),
            }
        }
        Ok((snippets, warnings))
    }

    /// Replaces the live file with `lines`, keeping the previous version as
    /// `<path>.old`. A crash between the rename and the write leaves no live
    /// file, but the backup still holds the prior snapshot.
    fn rewrite(&self, lines: &[String]) -> Result<()> {
        let backup = self.backup_path();
        if backup.exists() {
            fs::remove_file(&backup)?;
        }
        fs::rename(&self.path, &backup)?;

        let mut text = lines.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl SnippetStore for FileStore {
    fn add(&mut self, mut snippet: Snippet) -> Result<Snippet> {
        if snippet.id.is_empty() {
            snippet.id = id::generate(&snippet)?;
        }

        let (existing, _) = self.scan()?;
        for stored in &existing {
            if stored.id == snippet.id {
                return Err(SnipzError::Duplicate(format!(
                    "id {} is already stored (same category and tags?)",
                    snippet.id
                )));
            }
            if stored.content == snippet.content {
                return Err(SnipzError::Duplicate(format!(
                    "identical content already stored under id {}",
                    stored.id
                )));
            }
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", codec::encode_line(&snippet))?;

        Ok(snippet)
    }

    fn get_by_id(&self, id: &str) -> Result<Snippet> {
        if id.len() < ID_LEN {
            return Err(SnipzError::Validation(format!("invalid id: {}", id)));
        }

        for line in self.read_lines()? {
            if line.starts_with(id) {
                return codec::decode_line(&line);
            }
        }

        Err(SnipzError::NotFound(format!("no snippet with id {}", id)))
    }

    fn update(&mut self, incoming: &Snippet) -> Result<Snippet> {
        let stored = self.get_by_id(&incoming.id)?;
        let merged = stored.merged_with(incoming);
        self.remove(&incoming.id)?;
        self.add(merged)
    }

    fn append(&mut self, id: &str, extra: &str) -> Result<Snippet> {
        let stored = self.get_by_id(id)?;
        let appended = stored.with_appended(extra);
        self.remove(id)?;
        self.add(appended)
    }

    fn remove(&mut self, id: &str) -> Result<()> {
        if id.len() < ID_LEN {
            return Err(SnipzError::Validation(format!(
                "invalid id, too short: {}",
                id
            )));
        }

        let kept: Vec<String> = self
            .read_lines()?
            .into_iter()
            .filter(|line| !line.starts_with(id))
            .collect();
        self.rewrite(&kept)
    }

    fn search(&self, category: &str, tag_query: &str) -> Result<SearchResults> {
        let (snippets, warnings) = self.scan()?;
        Ok(SearchResults {
            snippets: snippets
                .into_iter()
                .filter(|s| super::snippet_matches(s, category, tag_query))
                .collect(),
            warnings,
        })
    }

    fn stats(&self) -> Result<StoreStats> {
        let (snippets, warnings) = self.scan()?;
        Ok(StoreStats::collect(&snippets, warnings))
    }
}
