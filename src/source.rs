//! Source file registry.
//!
//! Assigns stable ids to the files the host feeds through analysis, so a
//! diagnostic can refer to its file by a 4-byte handle and be rendered
//! with the real path later.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;

/// Handle for a source file registered in a [`FileSet`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct FileId(u32);

impl FileId {
    /// Create a FileId from a raw index.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileId({})", self.0)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file#{}", self.0)
    }
}

/// Thread-safe path ↔ id registry with file contents.
///
/// Ids are assigned sequentially on first sight of a path and are never
/// reused; a plugin invocation registers files, it does not evict them.
#[derive(Debug, Default)]
pub struct FileSet {
    inner: RwLock<FileSetInner>,
}

#[derive(Debug, Default)]
struct FileSetInner {
    path_to_id: IndexMap<PathBuf, FileId>,
    id_to_path: IndexMap<FileId, PathBuf>,
    contents: IndexMap<FileId, Arc<str>>,
}

impl FileSet {
    /// Create a new empty file set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the id for a path, assigning a fresh one on first sight.
    pub fn file_id(&self, path: &Path) -> FileId {
        // Fast path: read lock only
        {
            let inner = self.inner.read();
            if let Some(&id) = inner.path_to_id.get(path) {
                return id;
            }
        }

        let mut inner = self.inner.write();

        // Another thread may have registered the path between the locks
        if let Some(&id) = inner.path_to_id.get(path) {
            return id;
        }

        let id = FileId::new(inner.path_to_id.len() as u32);
        inner.path_to_id.insert(path.to_owned(), id);
        inner.id_to_path.insert(id, path.to_owned());
        id
    }

    /// Get the path for a registered id.
    pub fn path(&self, file: FileId) -> Option<PathBuf> {
        self.inner.read().id_to_path.get(&file).cloned()
    }

    /// Set the contents of a file.
    pub fn set_contents(&self, file: FileId, contents: impl Into<Arc<str>>) {
        self.inner.write().contents.insert(file, contents.into());
    }

    /// Get the contents of a file.
    pub fn contents(&self, file: FileId) -> Option<Arc<str>> {
        self.inner.read().contents.get(&file).cloned()
    }

    /// Get the number of registered files.
    pub fn len(&self) -> usize {
        self.inner.read().path_to_id.len()
    }

    /// Check if the file set is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_id_is_stable_per_path() {
        let files = FileSet::new();

        let a = files.file_id(Path::new("/svc/main.bal"));
        let b = files.file_id(Path::new("/svc/other.bal"));
        let c = files.file_id(Path::new("/svc/main.bal"));

        assert_ne!(a, b);
        assert_eq!(a, c);
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_path_lookup() {
        let files = FileSet::new();
        let path = Path::new("/svc/main.bal");
        let id = files.file_id(path);

        assert_eq!(files.path(id).as_deref(), Some(path));
        assert!(files.path(FileId::new(99)).is_none());
    }

    #[test]
    fn test_contents() {
        let files = FileSet::new();
        let id = files.file_id(Path::new("/svc/main.bal"));

        assert!(files.contents(id).is_none());

        files.set_contents(id, "import ballerina/udp;");

        assert_eq!(files.contents(id).as_deref(), Some("import ballerina/udp;"));
    }

    #[test]
    fn test_file_id_display() {
        assert_eq!(FileId::new(3).to_string(), "file#3");
    }

    #[test]
    fn test_file_id_size() {
        assert_eq!(std::mem::size_of::<FileId>(), 4);
    }
}
