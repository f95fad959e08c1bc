//! Plain-text point files: one `"<x> <y>"` pair per line.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::types::{Point, PointSet};

/// Errors from reading or parsing a point file.
#[derive(Debug)]
pub enum PointFileError {
    Io { path: PathBuf, source: io::Error },
    /// A non-blank line that is not exactly two integers. `line` is 1-based.
    Malformed { line: usize, content: String },
}

impl fmt::Display for PointFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot access {}: {source}", path.display()),
            Self::Malformed { line, content } => {
                write!(f, "line {line}: expected two integers, got {content:?}")
            }
        }
    }
}

impl std::error::Error for PointFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Malformed { .. } => None,
        }
    }
}

fn parse_line(raw: &str) -> Option<Point> {
    let mut it = raw.split_whitespace();
    let x = it.next()?.parse().ok()?;
    let y = it.next()?.parse().ok()?;
    if it.next().is_some() {
        return None;
    }
    Some(Point::new(x, y))
}

/// Parse a whole file body. Blank lines are skipped; any other bad line aborts the parse.
pub fn parse_points(text: &str) -> Result<Vec<Point>, PointFileError> {
    let mut out = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }
        let p = parse_line(raw).ok_or_else(|| PointFileError::Malformed {
            line: i + 1,
            content: raw.to_string(),
        })?;
        out.push(p);
    }
    Ok(out)
}

/// Inverse of `parse_points`.
pub fn format_points(points: &[Point]) -> String {
    let mut s = String::with_capacity(points.len() * 8);
    for p in points {
        s.push_str(&format!("{} {}\n", p.x, p.y));
    }
    s
}

/// Read raw points (duplicates kept) from `path`.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>, PointFileError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| PointFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_points(&text)
}

/// Write `points` to `path`, one pair per line.
pub fn write_points<P: AsRef<Path>>(path: P, points: &[Point]) -> Result<(), PointFileError> {
    let path = path.as_ref();
    fs::write(path, format_points(points)).map_err(|source| PointFileError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl PointSet {
    /// Read a point file and collapse repeated coordinates.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PointFileError> {
        Ok(Self::from_coords(read_points(path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whitespace_pairs_and_skips_blank_lines() {
        let pts = parse_points("0 0\n4   0\n\n  -3 7  \n\t2\t2\n").unwrap();
        assert_eq!(
            pts,
            vec![
                Point::new(0, 0),
                Point::new(4, 0),
                Point::new(-3, 7),
                Point::new(2, 2)
            ]
        );
    }

    #[test]
    fn malformed_line_reports_content() {
        for (body, bad_line, bad) in [
            ("0 0\n1,2\n", 2, "1,2"),
            ("0 0\n1 2 3\n", 2, "1 2 3"),
            ("7\n", 1, "7"),
            ("1 1\n2 2\nx y\n", 3, "x y"),
            ("1.5 2\n", 1, "1.5 2"),
        ] {
            match parse_points(body) {
                Err(PointFileError::Malformed { line, content }) => {
                    assert_eq!(line, bad_line);
                    assert_eq!(content, bad);
                }
                other => panic!("expected malformed error for {body:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn format_then_parse_preserves_order() {
        let pts = vec![Point::new(5, -1), Point::new(0, 0), Point::new(12, 3)];
        assert_eq!(parse_points(&format_points(&pts)).unwrap(), pts);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_points("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, PointFileError::Io { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }
}
