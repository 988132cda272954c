//! Catalog tree entries shared by every tree backend.

/// Kind of a catalog node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    /// Map a listing type tag (`file` / `dir`) to a kind.
    ///
    /// Other tags (`symlink`, `submodule`) have no counterpart and yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "file" => Some(EntryKind::File),
            "dir" => Some(EntryKind::Directory),
            _ => None,
        }
    }
}

/// One node of the catalog tree.
///
/// `path` is relative to the catalog root and always uses `/` separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
    pub path: String,
}

impl Entry {
    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self { name: name.into(), kind: EntryKind::File, path: path.into() }
    }

    pub fn directory(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self { name: name.into(), kind: EntryKind::Directory, path: path.into() }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Whether this entry is the terminal file named `file_name`.
    pub fn is_file_named(&self, file_name: &str) -> bool {
        self.kind == EntryKind::File && self.name == file_name
    }
}
