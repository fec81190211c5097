//! Per-file diff units.

/// Name used by unified diffs for the missing side of an added or deleted
/// file.
pub const DEV_NULL: &str = "/dev/null";

/// One file's portion of a multi-file diff.
///
/// Names are kept exactly as they appear in the diff, including any `a/` or
/// `b/` prefixes and quoting, so printing reproduces the input headers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileDiff {
    pub(crate) extended: Vec<String>,
    pub(crate) orig_name: String,
    pub(crate) orig_time: Option<String>,
    pub(crate) new_name: String,
    pub(crate) new_time: Option<String>,
    pub(crate) has_file_header: bool,
    pub(crate) hunks: Vec<Hunk>,
    pub(crate) binary_patch: Vec<String>,
}

impl FileDiff {
    /// Creates a file diff with `---`/`+++` headers and no hunks.
    ///
    /// # Examples
    ///
    ///     use changeset_specs::diff::{FileDiff, Hunk};
    ///
    ///     let file = FileDiff::new("a/src/lib.rs", "b/src/lib.rs")
    ///         .with_hunk(Hunk::new(1, 1, 1, 1).with_line("-old").with_line("+new"));
    ///     assert_eq!(file.effective_path(), "b/src/lib.rs");
    #[must_use]
    pub fn new(orig_name: impl Into<String>, new_name: impl Into<String>) -> Self {
        Self {
            orig_name: orig_name.into(),
            new_name: new_name.into(),
            has_file_header: true,
            ..Self::default()
        }
    }

    /// Appends an extended header line (for example `index 1a2b..3c4d`).
    #[must_use]
    pub fn with_extended_line(mut self, line: impl Into<String>) -> Self {
        self.extended.push(line.into());
        self
    }

    /// Appends a hunk.
    #[must_use]
    pub fn with_hunk(mut self, hunk: Hunk) -> Self {
        self.hunks.push(hunk);
        self
    }

    /// Returns the extended header lines, starting with the `diff` line when
    /// present.
    #[must_use]
    pub fn extended(&self) -> &[String] {
        &self.extended
    }

    /// Returns the original file name.
    #[must_use]
    pub fn orig_name(&self) -> &str {
        &self.orig_name
    }

    /// Returns the new file name.
    #[must_use]
    pub fn new_name(&self) -> &str {
        &self.new_name
    }

    /// Returns the original-side timestamp from the `---` header, if any.
    #[must_use]
    pub fn orig_time(&self) -> Option<&str> {
        self.orig_time.as_deref()
    }

    /// Returns the new-side timestamp from the `+++` header, if any.
    #[must_use]
    pub fn new_time(&self) -> Option<&str> {
        self.new_time.as_deref()
    }

    /// Returns whether the diff carried `---`/`+++` header lines.
    #[must_use]
    pub const fn has_file_header(&self) -> bool {
        self.has_file_header
    }

    /// Returns the hunks in file order.
    #[must_use]
    pub fn hunks(&self) -> &[Hunk] {
        &self.hunks
    }

    /// Returns the lines following a `GIT binary patch` or `Binary files`
    /// marker, blank separator lines included.
    #[must_use]
    pub fn binary_patch(&self) -> &[String] {
        &self.binary_patch
    }

    /// Returns whether the file was deleted.
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.new_name == DEV_NULL
    }

    /// Returns whether the file was added.
    #[must_use]
    pub fn is_added(&self) -> bool {
        self.orig_name == DEV_NULL
    }

    /// Returns the path identifying this file.
    ///
    /// This is the new name, or the original name when the file was deleted.
    /// Surrounding quotes are removed; escapes inside quoted names are kept.
    #[must_use]
    pub fn effective_path(&self) -> &str {
        let name = if self.is_deleted() {
            &self.orig_name
        } else {
            &self.new_name
        };
        name.strip_prefix('"')
            .and_then(|inner| inner.strip_suffix('"'))
            .unwrap_or(name)
    }
}

/// A contiguous changed region of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk {
    pub(crate) orig_start: u64,
    pub(crate) orig_lines: u64,
    pub(crate) new_start: u64,
    pub(crate) new_lines: u64,
    pub(crate) section: String,
    pub(crate) body: Vec<String>,
}

impl Hunk {
    /// Creates a hunk with the given header ranges and an empty body.
    #[must_use]
    pub const fn new(orig_start: u64, orig_lines: u64, new_start: u64, new_lines: u64) -> Self {
        Self {
            orig_start,
            orig_lines,
            new_start,
            new_lines,
            section: String::new(),
            body: Vec::new(),
        }
    }

    /// Sets the section heading printed after the closing `@@`.
    #[must_use]
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    /// Appends a body line, including its leading ` `, `-`, `+` or `\`.
    #[must_use]
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Returns the first original line covered by the hunk.
    #[must_use]
    pub const fn orig_start(&self) -> u64 {
        self.orig_start
    }

    /// Returns the number of original lines covered by the hunk.
    #[must_use]
    pub const fn orig_lines(&self) -> u64 {
        self.orig_lines
    }

    /// Returns the first new line covered by the hunk.
    #[must_use]
    pub const fn new_start(&self) -> u64 {
        self.new_start
    }

    /// Returns the number of new lines covered by the hunk.
    #[must_use]
    pub const fn new_lines(&self) -> u64 {
        self.new_lines
    }

    /// Returns the section heading, empty when absent.
    #[must_use]
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Returns the body lines without line terminators.
    #[must_use]
    pub fn body(&self) -> &[String] {
        &self.body
    }

    /// Counts the original-side and new-side lines present in the body.
    pub(crate) fn counted_lines(&self) -> (u64, u64) {
        self.body
            .iter()
            .fold((0, 0), |(orig, new), line| match line_kind(line) {
                Some(LineKind::Context) => (orig + 1, new + 1),
                Some(LineKind::Removed) => (orig + 1, new),
                Some(LineKind::Added) => (orig, new + 1),
                Some(LineKind::NoNewlineMarker) | None => (orig, new),
            })
    }
}

/// Classification of a hunk body line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineKind {
    Context,
    Removed,
    Added,
    NoNewlineMarker,
}

/// Classifies a hunk body line by its first character.
///
/// An empty line is context: some tools strip the single space of blank
/// context lines.
pub(crate) fn line_kind(line: &str) -> Option<LineKind> {
    match line.chars().next() {
        None | Some(' ') => Some(LineKind::Context),
        Some('-') => Some(LineKind::Removed),
        Some('+') => Some(LineKind::Added),
        Some('\\') => Some(LineKind::NoNewlineMarker),
        Some(_) => None,
    }
}
