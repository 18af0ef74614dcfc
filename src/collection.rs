//! Collection of analyzed sessions
//!
//! [`SessionCollection`] keeps one [`SessionSummary`] per source file, keyed
//! by path, and drives the batch operations: adding files or whole directory
//! trees, converting between representations, and writing reports. Progress
//! and per-file failures are reported through a [`NoticeSink`].

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use rust_i18n::t;
use serde::Serialize;

use crate::analysis::{analyze, SessionSummary};
use crate::error::{BinsError, Result, ResultExt};
use crate::notice::{Notice, NoticeSink};
use crate::report::write_report;
use crate::session;
use crate::types::Representation;

/// What a path points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Directory,
    File(Representation),
}

/// Classify a path as a directory or a supported log file
pub fn classify_path(path: &Path) -> Result<SourceKind> {
    if path.is_dir() {
        return Ok(SourceKind::Directory);
    }
    if !path.exists() {
        return Err(BinsError::NotFound(path.to_path_buf()));
    }
    match Representation::from_path(path) {
        Some(repr) if path.is_file() => Ok(SourceKind::File(repr)),
        _ => Err(BinsError::UnsupportedSource(path.to_path_buf())),
    }
}

/// Recursively list files of one representation under `dir`, sorted.
///
/// Symlinked directories are not followed. A directory that cannot be read
/// is reported to `sink` and skipped.
fn collect_files(
    dir: &Path,
    representation: Representation,
    sink: &mut dyn NoticeSink,
) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];
    while let Some(current) = pending.pop() {
        if let Err(e) = scan_directory(&current, representation, &mut pending, &mut files) {
            tracing::warn!("Skipping {}: {}", current.display(), e);
            sink.append(Notice::error(t!(
                "notice.read_dir_failed",
                path = current.display(),
                error = e.to_string()
            )));
        }
    }
    files.sort();
    files
}

fn scan_directory(
    dir: &Path,
    representation: Representation,
    pending: &mut Vec<PathBuf>,
    files: &mut Vec<PathBuf>,
) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            pending.push(path);
        } else if representation.matches_path(&path) {
            files.push(path);
        }
    }
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// One analyzed source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionEntry {
    /// File name shown in reports
    pub name: String,
    pub summary: SessionSummary,
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    path: &'a Path,
    name: &'a str,
    summary: &'a SessionSummary,
}

/// Analyzed sessions keyed by source path
#[derive(Debug, Default)]
pub struct SessionCollection {
    entries: BTreeMap<PathBuf, CollectionEntry>,
    representation: Representation,
}

impl SessionCollection {
    pub fn new(representation: Representation) -> Self {
        Self {
            entries: BTreeMap::new(),
            representation,
        }
    }

    /// Representation picked up when scanning directories
    pub fn representation(&self) -> Representation {
        self.representation
    }

    /// Switch directory scanning to the other representation
    pub fn toggle_representation(&mut self) -> Representation {
        self.representation = self.representation.toggled();
        self.representation
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in path order
    pub fn entries(&self) -> impl Iterator<Item = (&Path, &CollectionEntry)> {
        self.entries.iter().map(|(p, e)| (p.as_path(), e))
    }

    pub fn get(&self, path: &Path) -> Option<&CollectionEntry> {
        self.entries.get(path)
    }

    /// Decode, analyze and add one file.
    ///
    /// Returns `Ok(false)` if the path is already in the collection.
    pub fn add(&mut self, path: &Path, sink: &mut dyn NoticeSink) -> Result<bool> {
        let name = file_name(path);
        if self.entries.contains_key(path) {
            sink.append(Notice::info(t!("notice.already_added", name = name)));
            return Ok(false);
        }

        let result = match classify_path(path) {
            Ok(SourceKind::File(repr)) => session::load(path, repr)
                .with_context(|| format!("Failed to load {}", path.display())),
            Ok(SourceKind::Directory) => Err(BinsError::UnsupportedSource(path.to_path_buf())),
            Err(e) => Err(e),
        };
        let session = match result {
            Ok(session) => session,
            Err(e) => {
                sink.append(Notice::error(t!(
                    "notice.open_failed",
                    name = name,
                    error = e.to_string()
                )));
                return Err(e);
            }
        };

        let summary = analyze(&session);
        tracing::info!(
            "Added {} ({} records, reference {})",
            path.display(),
            summary.record_count,
            summary.reference_index
        );
        self.entries
            .insert(path.to_path_buf(), CollectionEntry { name, summary });
        Ok(true)
    }

    /// Add every file of the selected representation under `dir`.
    ///
    /// Failures are reported per file and do not stop the scan. Returns the
    /// number of files added.
    pub fn add_all(&mut self, dir: &Path, sink: &mut dyn NoticeSink) -> usize {
        let files = collect_files(dir, self.representation, sink);

        let mut added = 0;
        for file in &files {
            // Failures have already been reported
            if let Ok(true) = self.add(file, sink) {
                added += 1;
            }
        }

        if added == 0 {
            sink.append(Notice::warning(t!("notice.no_files", path = dir.display())));
        } else {
            sink.append(Notice::info(t!("notice.files_added", count = added)));
        }
        added
    }

    /// Convert one file to `target`, writing it next to the source.
    ///
    /// Returns the path of the written file.
    pub fn convert(
        &self,
        path: &Path,
        target: Representation,
        sink: &mut dyn NoticeSink,
    ) -> Result<PathBuf> {
        let result = convert_file(path, target);
        match &result {
            Ok(output) => sink.append(Notice::info(t!(
                "notice.converted",
                from = file_name(path),
                to = file_name(output)
            ))),
            Err(e) => sink.append(Notice::error(t!(
                "notice.convert_failed",
                name = file_name(path),
                error = e
            ))),
        }
        result
    }

    /// Convert every file of the other representation under `dir` to `target`.
    ///
    /// Returns the number of files converted.
    pub fn convert_all(
        &self,
        dir: &Path,
        target: Representation,
        sink: &mut dyn NoticeSink,
    ) -> usize {
        let files = collect_files(dir, target.toggled(), sink);

        let converted = files
            .iter()
            .filter(|file| self.convert(file, target, sink).is_ok())
            .count();

        if converted == 0 {
            sink.append(Notice::warning(t!("notice.no_convertible")));
        } else {
            sink.append(Notice::info(t!("notice.files_converted", count = converted)));
        }
        converted
    }

    /// Write the tab-delimited report of every entry
    pub fn save_report(&self, path: &Path, sink: &mut dyn NoticeSink) -> Result<()> {
        let result = File::create(path).map_err(BinsError::from).and_then(|file| {
            let entries = self
                .entries
                .values()
                .map(|e| (e.name.as_str(), &e.summary));
            write_report(entries, BufWriter::new(file)).map_err(BinsError::from)
        });

        match result {
            Ok(()) => {
                sink.append(Notice::info(t!("notice.report_saved", path = path.display())));
                tracing::info!("Wrote report for {} sessions to {}", self.len(), path.display());
                Ok(())
            }
            Err(e) => {
                sink.append(Notice::error(t!(
                    "notice.report_failed",
                    path = path.display(),
                    error = e.to_string()
                )));
                Err(e.with_context(format!("Failed to write report {}", path.display())))
            }
        }
    }

    /// Write every entry as a JSON array
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let entries: Vec<JsonEntry<'_>> = self
            .entries
            .iter()
            .map(|(p, e)| JsonEntry {
                path: p,
                name: &e.name,
                summary: &e.summary,
            })
            .collect();

        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &entries)?;
        Ok(())
    }
}

fn convert_file(path: &Path, target: Representation) -> Result<PathBuf> {
    let source_repr = match classify_path(path)? {
        SourceKind::File(repr) => repr,
        SourceKind::Directory => return Err(BinsError::UnsupportedSource(path.to_path_buf())),
    };
    if source_repr == target {
        return Err(BinsError::Conversion {
            path: path.to_path_buf(),
            target,
        });
    }

    let session = session::load(path, source_repr)?;
    let output = path.with_extension(target.extension());
    session::save(&session, target, &output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    tracing::info!(
        "Converted {} -> {} ({} records)",
        path.display(),
        output.display(),
        session.len()
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::{MockNoticeSink, NoticeLevel, NoticeQueue};
    use crate::record::{binary, Record};
    use crate::types::Axes;

    fn write_binary(path: &Path, counts: &[u16]) {
        let mut out = Vec::new();
        for &count in counts {
            binary::encode_into(
                &Record {
                    count,
                    thdg: 45.5,
                    gyro: Axes::splat(f32::from(count)),
                    ..Default::default()
                },
                &mut out,
            );
        }
        std::fs::write(path, out).unwrap();
    }

    #[test]
    fn test_classify_path() {
        let dir = tempfile::tempdir().unwrap();
        let dat = dir.path().join("a.DAT");
        let other = dir.path().join("a.csv");
        std::fs::write(&dat, b"").unwrap();
        std::fs::write(&other, b"").unwrap();

        assert_eq!(classify_path(dir.path()).unwrap(), SourceKind::Directory);
        assert_eq!(
            classify_path(&dat).unwrap(),
            SourceKind::File(Representation::Binary)
        );
        assert!(matches!(
            classify_path(&other),
            Err(BinsError::UnsupportedSource(_))
        ));
        assert!(matches!(
            classify_path(&dir.path().join("missing.dat")),
            Err(BinsError::NotFound(_))
        ));
    }

    #[test]
    fn test_add_and_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.dat");
        write_binary(&path, &[59, 60, 61, 62]);

        let mut collection = SessionCollection::default();
        let mut queue = NoticeQueue::new();
        assert!(collection.add(&path, &mut queue).unwrap());
        assert!(queue.is_empty());
        assert!(!collection.add(&path, &mut queue).unwrap());
        assert_eq!(collection.len(), 1);

        let notice = queue.extract().unwrap();
        assert_eq!(notice.level, NoticeLevel::Info);
        assert!(notice.message.contains("run.dat"));

        let entry = collection.get(&path).unwrap();
        assert_eq!(entry.name, "run.dat");
        assert_eq!(entry.summary.record_count, 3);
        assert_eq!(entry.summary.duration, 62);
    }

    #[test]
    fn test_add_failure_notifies() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cold.dat");
        write_binary(&path, &[1, 2, 3]);

        let mut sink = MockNoticeSink::new();
        sink.expect_append()
            .withf(|n| n.level == NoticeLevel::Error && n.message.contains("cold.dat"))
            .times(1)
            .return_const(());

        let mut collection = SessionCollection::default();
        let err = collection.add(&path, &mut sink).unwrap_err();
        assert!(err.to_string().contains("cold.dat"));
        assert!(collection.is_empty());
    }

    #[test]
    fn test_convert_same_representation_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.dat");
        write_binary(&path, &[60]);

        let collection = SessionCollection::default();
        let mut queue = NoticeQueue::new();
        let err = collection
            .convert(&path, Representation::Binary, &mut queue)
            .unwrap_err();
        assert!(matches!(err, BinsError::Conversion { .. }));
        assert_eq!(queue.extract().map(|n| n.level), Some(NoticeLevel::Error));
    }

    #[test]
    fn test_missing_directory_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut collection = SessionCollection::default();
        let mut queue = NoticeQueue::new();

        assert_eq!(collection.add_all(&dir.path().join("gone"), &mut queue), 0);
        assert_eq!(queue.extract().map(|n| n.level), Some(NoticeLevel::Error));
        assert_eq!(queue.extract().map(|n| n.level), Some(NoticeLevel::Warning));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdirectory_skipped() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let locked = dir.path().join("locked");
        std::fs::create_dir(&locked).unwrap();
        write_binary(&locked.join("hidden.dat"), &[60, 61]);
        write_binary(&dir.path().join("run.dat"), &[60, 61]);
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not apply to privileged users
        if std::fs::read_dir(&locked).is_ok() {
            std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let mut collection = SessionCollection::default();
        let mut queue = NoticeQueue::new();
        let added = collection.add_all(dir.path(), &mut queue);
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(added, 1);
        assert!(collection.get(&dir.path().join("run.dat")).is_some());
        let error = queue.extract().unwrap();
        assert_eq!(error.level, NoticeLevel::Error);
        assert!(error.message.contains("locked"));
    }

    #[test]
    fn test_toggle_representation() {
        let mut collection = SessionCollection::new(Representation::Binary);
        assert_eq!(collection.toggle_representation(), Representation::Text);
        assert_eq!(collection.representation(), Representation::Text);
        assert_eq!(collection.toggle_representation(), Representation::Binary);
    }
}
