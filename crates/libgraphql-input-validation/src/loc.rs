use std::path::Path;
use std::path::PathBuf;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes a PathBuf to the file the position was read from (if any).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct FilePosition {
    pub col: usize,
    pub file: Option<PathBuf>,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos<P: AsRef<Path>>(
        file: Option<P>,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            col: pos.column,
            file: file.map(|f| f.as_ref().to_path_buf()),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file.display(), self.line, self.col),
            None => write!(f, "{}:{}", self.line, self.col),
        }
    }
}

/// Where some schema element was defined.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SchemaDefLocation {
    GraphQLBuiltIn,
    Schema(FilePosition),
}
impl SchemaDefLocation {
    pub fn as_file_position(&self) -> Option<&FilePosition> {
        if let Self::Schema(pos) = self {
            Some(pos)
        } else {
            None
        }
    }
}
impl std::convert::From<FilePosition> for SchemaDefLocation {
    fn from(value: FilePosition) -> Self {
        Self::Schema(value)
    }
}

/// For a schema element whose position points at its leading description
/// string, find the position of the first token after that description
/// (the element's name).
///
/// Returns `pos` unchanged when no string literal starts at `pos`.
pub(crate) fn skip_description(source: &str, pos: graphql_parser::Pos) -> graphql_parser::Pos {
    let Some(mut cursor) = SourceCursor::at(source, pos) else {
        return pos;
    };

    if cursor.rest.starts_with("\"\"\"") {
        cursor.bump_n(3);
        loop {
            if cursor.rest.starts_with("\\\"\"\"") {
                cursor.bump_n(4);
            } else if cursor.rest.starts_with("\"\"\"") {
                cursor.bump_n(3);
                break;
            } else if cursor.bump().is_none() {
                return pos;
            }
        }
    } else if cursor.rest.starts_with('"') {
        cursor.bump();
        loop {
            match cursor.bump() {
                Some('\\') => {
                    cursor.bump();
                },
                Some('"') => break,
                Some(_) => (),
                None => return pos,
            }
        }
    } else {
        return pos;
    }

    cursor.skip_ignored();
    graphql_parser::Pos {
        line: cursor.line,
        column: cursor.column,
    }
}

struct SourceCursor<'a> {
    column: usize,
    line: usize,
    rest: &'a str,
}
impl<'a> SourceCursor<'a> {
    fn at(source: &'a str, pos: graphql_parser::Pos) -> Option<Self> {
        let line_start =
            if pos.line <= 1 {
                0
            } else {
                source.match_indices('\n')
                    .nth(pos.line - 2)
                    .map(|(idx, _)| idx + 1)?
            };
        let line = &source[line_start..];
        let col_offset =
            line.char_indices()
                .nth(pos.column.saturating_sub(1))
                .map(|(idx, _)| idx)?;

        Some(Self {
            column: pos.column,
            line: pos.line,
            rest: &line[col_offset..],
        })
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.rest.chars().next()?;
        self.rest = &self.rest[ch.len_utf8()..];
        match ch {
            '\n' => {
                self.line += 1;
                self.column = 1;
            },
            '\r' if self.rest.starts_with('\n') => (),
            '\r' => {
                self.line += 1;
                self.column = 1;
            },
            _ => self.column += 1,
        }
        Some(ch)
    }

    fn bump_n(&mut self, n: usize) {
        for _ in 0..n {
            self.bump();
        }
    }

    /// Skip whitespace, commas and comments.
    fn skip_ignored(&mut self) {
        while let Some(ch) = self.rest.chars().next() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{feff}' => {
                    self.bump();
                },
                '#' => {
                    while self.rest.chars().next().is_some_and(|ch| ch != '\n' && ch != '\r') {
                        self.bump();
                    }
                },
                _ => break,
            }
        }
    }
}
