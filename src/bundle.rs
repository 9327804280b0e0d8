//! Read-only, path-keyed view over embedded files
//!
//! A [`Bundle`] is a sorted table of [`Entry`] values captured at build time. Directories
//! are implicit: `src` exists because `src/main.cpp` does. Every lookup borrows from the
//! table, so a `Bundle<'static>` can be shared across threads without synchronization.

use std::borrow::Cow;
use std::io::{self, BufRead, Cursor, Read, Seek, SeekFrom};
use std::iter::FusedIterator;
use std::slice;
use std::time::SystemTime;

use serde::Serialize;
use wax::{CandidatePath, Glob, Pattern};

use crate::error::{self, Result};
use crate::hash;
use crate::path_utils::{self, ROOT};

/// Permission bits reported for embedded files
pub const FILE_MODE: u32 = 0o444;

/// Permission bits reported for implicit directories
pub const DIR_MODE: u32 = 0o555;

/// A single embedded file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    path: &'a str,
    contents: &'a [u8],
    hash: Option<&'a str>,
}

impl<'a> Entry<'a> {
    /// Create an entry whose hash is computed on demand
    pub const fn new(path: &'a str, contents: &'a [u8]) -> Self {
        Self {
            path,
            contents,
            hash: None,
        }
    }

    /// Create an entry with a precomputed `blake3:` hash
    pub const fn with_hash(path: &'a str, contents: &'a [u8], hash: &'a str) -> Self {
        Self {
            path,
            contents,
            hash: Some(hash),
        }
    }

    pub fn path(&self) -> &'a str {
        self.path
    }

    pub fn name(&self) -> &'a str {
        path_utils::file_name(self.path)
    }

    pub fn contents(&self) -> &'a [u8] {
        self.contents
    }

    pub fn size(&self) -> u64 {
        self.contents.len() as u64
    }

    /// BLAKE3 hash of the contents, prefixed with `blake3:`
    pub fn hash(&self) -> Cow<'a, str> {
        match self.hash {
            Some(hash) => Cow::Borrowed(hash),
            None => Cow::Owned(hash::hash_bytes(self.contents)),
        }
    }

    pub fn metadata(&self) -> Metadata<'a> {
        Metadata {
            path: self.path,
            name: self.name(),
            kind: EntryKind::File,
            size: self.size(),
            hash: Some(self.hash()),
        }
    }

    /// Within a run of paths sharing a prefix of `prefix_len` bytes, true if this path is
    /// the prefix itself or lies below it. "src" must not match "src.txt" or "srcs/a.h".
    fn in_run(&self, prefix_len: usize) -> bool {
        prefix_len == 0
            || self.path.len() == prefix_len
            || self.path.as_bytes()[prefix_len] == b'/'
    }

    /// True if this entry lies under the normalized directory `dir` (`""` is the root)
    fn is_under(&self, dir: &str) -> bool {
        dir.is_empty()
            || self
                .path
                .strip_prefix(dir)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// Whether a path names a file or an implicit directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
}

/// Metadata for a file or directory in a bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata<'a> {
    pub path: &'a str,
    pub name: &'a str,
    pub kind: EntryKind,
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<Cow<'a, str>>,
}

impl Metadata<'_> {
    fn dir(path: &str) -> Metadata<'_> {
        Metadata {
            path,
            name: path_utils::file_name(path),
            kind: EntryKind::Dir,
            size: 0,
            hash: None,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// Unix-style permission bits; embedded content is always read-only
    pub fn mode(&self) -> u32 {
        match self.kind {
            EntryKind::File => FILE_MODE,
            EntryKind::Dir => DIR_MODE,
        }
    }

    /// Embedded files carry no modification time
    pub fn modified(&self) -> Option<SystemTime> {
        None
    }
}

/// An immutable set of embedded files
///
/// Entries must be sorted by path with no duplicates. The table generated by the
/// build script always is.
#[derive(Debug, Clone, Copy)]
pub struct Bundle<'a> {
    entries: &'a [Entry<'a>],
}

impl<'a> Bundle<'a> {
    pub const fn new(entries: &'a [Entry<'a>]) -> Self {
        Self { entries }
    }

    /// Open an embedded file as a byte stream
    pub fn open(&self, path: &str) -> Result<File<'a>> {
        let entry = self.lookup(path)?;
        Ok(File {
            cursor: Cursor::new(entry.contents),
            entry,
        })
    }

    /// Complete contents of an embedded file
    pub fn read_all(&self, path: &str) -> Result<&'a [u8]> {
        self.lookup(path).map(|entry| entry.contents)
    }

    /// Contents of an embedded file as UTF-8
    pub fn read_to_string(&self, path: &str) -> Result<&'a str> {
        let bytes = self.read_all(path)?;
        std::str::from_utf8(bytes).map_err(|e| error::not_utf8(path, e.to_string()))
    }

    /// Lazily enumerate the files under `prefix`
    ///
    /// `""`, `"."` and `"/"` list everything. A prefix naming a file yields just that file,
    /// and a prefix that matches nothing yields nothing.
    pub fn list(&self, prefix: &str) -> List<'a> {
        let Some(prefix) = path_utils::normalize_prefix(prefix) else {
            return List::empty();
        };

        // Paths starting with `prefix` form one contiguous run of the sorted table.
        let start = self.entries.partition_point(|e| e.path < prefix);
        let run = &self.entries[start..];
        let len = run.partition_point(|e| e.path.starts_with(prefix));

        List {
            iter: run[..len].iter(),
            prefix_len: prefix.len(),
        }
    }

    /// Same files as [`Bundle::list`], as entries rather than metadata
    pub fn entries_under(&self, prefix: &str) -> impl Iterator<Item = &'a Entry<'a>> + use<'a> {
        let List { iter, prefix_len } = self.list(prefix);
        iter.filter(move |e| e.in_run(prefix_len))
    }

    /// Metadata for a file or directory
    pub fn stat(&self, path: &str) -> Result<Metadata<'a>> {
        if let Some(entry) = self.find(path) {
            return Ok(entry.metadata());
        }

        self.dir_path(path)
            .map(Metadata::dir)
            .ok_or_else(|| error::not_found(path))
    }

    /// Immediate children of a directory, sorted by name
    pub fn read_dir(&self, dir: &str) -> Result<Vec<Metadata<'a>>> {
        let dir = self.dir_path(dir).ok_or_else(|| error::not_found(dir))?;
        let dir = if dir == ROOT { "" } else { dir };
        let skip = if dir.is_empty() { 0 } else { dir.len() + 1 };

        let mut children: Vec<Metadata<'a>> = Vec::new();
        for entry in self.entries.iter().filter(|e| e.is_under(dir)) {
            let rest = &entry.path[skip..];
            match rest.find('/') {
                Some(slash) => {
                    let child = &entry.path[..skip + slash];
                    if !children.iter().any(|c| c.path == child) {
                        children.push(Metadata::dir(child));
                    }
                }
                None => children.push(entry.metadata()),
            }
        }

        children.sort_by(|a, b| a.name.cmp(b.name));
        Ok(children)
    }

    /// Files whose path matches a glob pattern
    pub fn glob(&self, pattern: &str) -> Result<Vec<Metadata<'a>>> {
        let glob =
            Glob::new(pattern).map_err(|e| error::invalid_pattern(pattern, e.to_string()))?;

        Ok(self
            .entries
            .iter()
            .filter(|e| glob.matched(&CandidatePath::from(e.path)).is_some())
            .map(Entry::metadata)
            .collect())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.find(path).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &'a [Entry<'a>] {
        self.entries
    }

    pub fn paths(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.entries.iter().map(|e| e.path)
    }

    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(Entry::size).sum()
    }

    /// BLAKE3 hash over every `(path, contents)` pair in the bundle
    pub fn digest(&self) -> String {
        hash::hash_entries(self.entries.iter().map(|e| (e.path, e.contents)))
    }

    fn find(&self, path: &str) -> Option<&'a Entry<'a>> {
        if !path_utils::is_valid_path(path) {
            return None;
        }

        self.entries
            .binary_search_by(|e| e.path.cmp(path))
            .ok()
            .map(|i| &self.entries[i])
    }

    fn lookup(&self, path: &str) -> Result<&'a Entry<'a>> {
        self.find(path).ok_or_else(|| error::not_found(path))
    }

    /// Resolve `path` to a directory path borrowed from the table, if it is one
    ///
    /// Accepts the same spellings as [`Bundle::list`]: `src`, `src/` and `./src` all
    /// name the same directory.
    fn dir_path(&self, path: &str) -> Option<&'a str> {
        let path = path_utils::normalize_prefix(path)?;
        if path.is_empty() {
            return Some(ROOT);
        }

        self.entries
            .iter()
            .find(|e| e.is_under(path))
            .map(|e| &e.path[..path.len()])
    }
}

/// Lazy iterator returned by [`Bundle::list`]
///
/// Cloning restarts nothing; it forks the iteration at the current position. Call
/// [`Bundle::list`] again to start over.
#[derive(Debug, Clone)]
pub struct List<'a> {
    iter: slice::Iter<'a, Entry<'a>>,
    prefix_len: usize,
}

impl List<'_> {
    fn empty() -> Self {
        let none: &[Entry<'_>] = &[];
        Self {
            iter: none.iter(),
            prefix_len: 0,
        }
    }
}

impl<'a> Iterator for List<'a> {
    type Item = Metadata<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let prefix_len = self.prefix_len;
        self.iter
            .by_ref()
            .find(|e| e.in_run(prefix_len))
            .map(Entry::metadata)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.iter.len()))
    }
}

impl FusedIterator for List<'_> {}

/// An open embedded file
///
/// Reads advance an independent cursor, so any number of `File`s may be open on the same
/// entry at once.
#[derive(Debug, Clone)]
pub struct File<'a> {
    entry: &'a Entry<'a>,
    cursor: Cursor<&'a [u8]>,
}

impl<'a> File<'a> {
    pub fn metadata(&self) -> Metadata<'a> {
        self.entry.metadata()
    }

    /// Full contents, independent of the read position
    pub fn contents(&self) -> &'a [u8] {
        self.entry.contents
    }
}

impl Read for File<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.cursor.read(buf)
    }
}

impl BufRead for File<'_> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.cursor.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.cursor.consume(amt);
    }
}

impl Seek for File<'_> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.cursor.seek(pos)
    }
}
