//! Multi-file unified diff parser.

use super::{
    DEV_NULL, DiffParseError, FileDiff, Hunk,
    file_diff::{LineKind, line_kind},
};

/// Parses a combined multi-file diff into per-file units in input order.
///
/// Empty input yields no files. Blank lines between files are ignored.
///
/// # Errors
///
/// Returns [`DiffParseError`] when the text is not a well-formed diff. A
/// malformed diff is rejected as a whole; no partial result is returned.
pub fn parse_multi_file_diff(input: &str) -> Result<Vec<FileDiff>, DiffParseError> {
    let lines = input
        .split_inclusive('\n')
        .map(|line| line.strip_suffix('\n').unwrap_or(line))
        .collect();
    Parser {
        lines,
        position: 0,
    }
    .parse()
}

struct Parser<'a> {
    lines: Vec<&'a str>,
    position: usize,
}

impl<'a> Parser<'a> {
    fn parse(mut self) -> Result<Vec<FileDiff>, DiffParseError> {
        let mut files = Vec::new();
        while let Some(line) = self.peek() {
            if starts_file(line) {
                files.push(self.parse_file()?);
            } else if line.trim().is_empty() {
                self.advance();
            } else {
                return Err(DiffParseError::UnexpectedLine {
                    line_number: self.line_number(),
                    line: line.to_owned(),
                });
            }
        }
        Ok(files)
    }

    fn parse_file(&mut self) -> Result<FileDiff, DiffParseError> {
        let mut file = FileDiff::default();

        if let Some(line) = self.peek().filter(|line| line.starts_with("diff ")) {
            file.extended.push(line.to_owned());
            self.advance();
            while let Some(line) = self.peek() {
                if ends_extended_header(line) {
                    break;
                }
                file.extended.push(line.to_owned());
                self.advance();
                if starts_binary_patch(line) {
                    file.binary_patch = self.take_binary_patch();
                    break;
                }
            }
        }

        if let Some(orig) = self.peek().and_then(|line| line.strip_prefix("--- ")) {
            self.advance();
            let new = self
                .peek()
                .and_then(|line| line.strip_prefix("+++ "))
                .ok_or(DiffParseError::MissingNewFileHeader {
                    line_number: self.line_number(),
                })?;
            self.advance();
            (file.orig_name, file.orig_time) = split_name_and_time(orig);
            (file.new_name, file.new_time) = split_name_and_time(new);
            file.has_file_header = true;
        }

        while self.peek().is_some_and(|line| line.starts_with("@@ ")) {
            if !file.has_file_header {
                return Err(DiffParseError::MissingFileHeader {
                    line_number: self.line_number(),
                });
            }
            let hunk = self.parse_hunk()?;
            file.hunks.push(hunk);
        }

        if !file.has_file_header {
            (file.orig_name, file.new_name) = names_from_extended_header(&file.extended);
        }
        Ok(file)
    }

    fn parse_hunk(&mut self) -> Result<Hunk, DiffParseError> {
        let header_line_number = self.line_number();
        let header = self.peek().unwrap_or_default();
        let mut hunk =
            parse_hunk_header(header).ok_or_else(|| DiffParseError::InvalidHunkHeader {
                line_number: header_line_number,
                line: header.to_owned(),
            })?;
        self.advance();

        let mut orig_remaining = hunk.orig_lines;
        let mut new_remaining = hunk.new_lines;
        while orig_remaining > 0 || new_remaining > 0 {
            let truncated = DiffParseError::TruncatedHunk {
                line_number: header_line_number,
            };
            let line = self.peek().ok_or_else(|| truncated.clone())?;
            let overflow = DiffParseError::HunkLineCountMismatch {
                line_number: self.line_number(),
            };
            match line_kind(line).ok_or(truncated)? {
                LineKind::Context => {
                    orig_remaining = orig_remaining.checked_sub(1).ok_or_else(|| overflow.clone())?;
                    new_remaining = new_remaining.checked_sub(1).ok_or(overflow)?;
                }
                LineKind::Removed => {
                    orig_remaining = orig_remaining.checked_sub(1).ok_or(overflow)?;
                }
                LineKind::Added => {
                    new_remaining = new_remaining.checked_sub(1).ok_or(overflow)?;
                }
                LineKind::NoNewlineMarker => {}
            }
            hunk.body.push(line.to_owned());
            self.advance();
        }

        while let Some(marker) = self.peek().filter(|line| line.starts_with('\\')) {
            hunk.body.push(marker.to_owned());
            self.advance();
        }
        Ok(hunk)
    }

    /// Takes every line up to the next `diff ` line; binary patches
    /// separate their `literal`/`delta` blocks with blank lines.
    fn take_binary_patch(&mut self) -> Vec<String> {
        let mut lines = Vec::new();
        while let Some(line) = self.peek().filter(|line| !line.starts_with("diff ")) {
            lines.push(line.to_owned());
            self.advance();
        }
        lines
    }

    fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    const fn line_number(&self) -> usize {
        self.position + 1
    }
}

fn starts_file(line: &str) -> bool {
    line.starts_with("diff ") || line.starts_with("--- ")
}

fn starts_binary_patch(line: &str) -> bool {
    line == "GIT binary patch" || (line.starts_with("Binary files ") && line.ends_with(" differ"))
}

fn ends_extended_header(line: &str) -> bool {
    starts_file(line) || line.starts_with("@@ ") || line.trim().is_empty()
}

/// Splits `name<TAB>timestamp` header text.
fn split_name_and_time(header: &str) -> (String, Option<String>) {
    match header.split_once('\t') {
        Some((name, time)) => (name.to_owned(), Some(time.to_owned())),
        None => (header.to_owned(), None),
    }
}

/// Parses `@@ -a[,b] +c[,d] @@[ section]`.
fn parse_hunk_header(line: &str) -> Option<Hunk> {
    let rest = line.strip_prefix("@@ -")?;
    let (ranges, section) = rest.split_once(" @@")?;
    let (orig, new) = ranges.split_once(" +")?;
    let (orig_start, orig_lines) = parse_range(orig)?;
    let (new_start, new_lines) = parse_range(new)?;
    let section = section.strip_prefix(' ').unwrap_or(section);
    Some(Hunk::new(orig_start, orig_lines, new_start, new_lines).with_section(section))
}

/// Parses `start[,count]`; an omitted count means one line.
fn parse_range(range: &str) -> Option<(u64, u64)> {
    match range.split_once(',') {
        Some((start, count)) => Some((start.parse().ok()?, count.parse().ok()?)),
        None => Some((range.parse().ok()?, 1)),
    }
}

/// Derives file names for header-only git diffs (mode changes, renames and
/// binary files), which carry no `---`/`+++` lines.
fn names_from_extended_header(extended: &[String]) -> (String, String) {
    let (mut orig, mut new) = extended
        .first()
        .and_then(|line| line.strip_prefix("diff --git "))
        .and_then(split_git_header_names)
        .unwrap_or_default();

    for line in extended.iter().skip(1) {
        if let Some(path) = line
            .strip_prefix("rename from ")
            .or_else(|| line.strip_prefix("copy from "))
        {
            orig = format!("a/{path}");
        } else if let Some(path) = line
            .strip_prefix("rename to ")
            .or_else(|| line.strip_prefix("copy to "))
        {
            new = format!("b/{path}");
        } else if line.starts_with("new file mode ") {
            DEV_NULL.clone_into(&mut orig);
        } else if line.starts_with("deleted file mode ") {
            DEV_NULL.clone_into(&mut new);
        }
    }
    (orig, new)
}

/// Splits the `<old> <new>` operand of a `diff --git` line.
///
/// Unquoted paths may contain spaces. The split prefers a ` b/` separator
/// yielding identical `a/`/`b/` paths, then a space between two identical
/// halves (`--no-prefix` output), and finally the first ` b/`.
fn split_git_header_names(operands: &str) -> Option<(String, String)> {
    if operands.starts_with('"') {
        let (orig, new) = operands.split_once("\" ")?;
        return Some((format!("{orig}\""), new.to_owned()));
    }

    let candidates: Vec<(&str, &str)> = operands
        .match_indices(" b/")
        .filter_map(|(index, _)| {
            let (orig, rest) = operands.split_at(index);
            Some((orig, rest.strip_prefix(' ')?))
        })
        .collect();

    candidates
        .iter()
        .copied()
        .find(|(orig, new)| orig.strip_prefix("a/") == new.strip_prefix("b/"))
        .or_else(|| split_identical_halves(operands))
        .or_else(|| candidates.first().copied())
        .map(|(orig, new)| (orig.to_owned(), new.to_owned()))
}

/// Splits `<path> <path>` at the space separating two identical paths.
fn split_identical_halves(operands: &str) -> Option<(&str, &str)> {
    operands
        .match_indices(' ')
        .filter_map(|(index, _)| {
            let (orig, rest) = operands.split_at(index);
            Some((orig, rest.strip_prefix(' ')?))
        })
        .find(|(orig, new)| !orig.is_empty() && orig == new)
}
