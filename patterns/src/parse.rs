//! Parsers for the three common pattern interchange formats.
//!
//! - Run Length Encoded (`.rle`), the conwaylife.com archive format.
//! - Plaintext (`.cells`): `.` dead, `O` alive, `!` comments.
//! - Life 1.06 (`.life`): one `x y` coordinate pair per line.
//!
//! All parsers produce the jagged 0/1 matrix the engine seeds from; none of
//! them pad rows to a common width.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use life_core::Pattern;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("read pattern: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed RLE header {0:?}")]
    Header(String),
    #[error("malformed run count {0:?}")]
    RunCount(String),
    #[error("malformed coordinate line {0:?}")]
    Coordinate(String),
    #[error("unsupported pattern format {0:?} (expected .rle, .cells or .life)")]
    UnsupportedFormat(String),
}

/// Parse a pattern file, dispatching on its extension.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Pattern, ParseError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    parse(BufReader::new(file), &path.to_string_lossy())
}

/// Parse embedded or in-memory pattern text named like a file.
pub fn parse_str(contents: &str, name: &str) -> Result<Pattern, ParseError> {
    parse(contents.as_bytes(), name)
}

fn parse(reader: impl BufRead, name: &str) -> Result<Pattern, ParseError> {
    match Path::new(name).extension().and_then(|ext| ext.to_str()) {
        Some("rle") => rle(reader).map(|(_, _, pattern)| pattern),
        Some("cells") => cells(reader),
        Some("life") => life(reader),
        _ => Err(ParseError::UnsupportedFormat(name.to_string())),
    }
}

/// Parse RLE, returning the declared `(x, y)` extent and the cell matrix.
///
/// The declared extent is informational only: the matrix holds exactly the
/// runs the body encodes, with rows left jagged where the encoder elided
/// trailing dead cells.
pub fn rle(reader: impl BufRead) -> Result<(usize, usize, Pattern), ParseError> {
    let mut extent = (0, 0);
    let mut pattern = Pattern::new();
    let mut row = Vec::new();
    // Run counts may span physical lines, so the digit buffer lives here.
    let mut digits = String::new();

    'body: for line in reader.lines() {
        let line = line?;
        if line.starts_with('#') {
            continue;
        }
        if line.starts_with('x') {
            extent = rle_header(&line)?;
            continue;
        }
        for ch in line.chars() {
            if ch.is_ascii_digit() {
                digits.push(ch);
                continue;
            }
            let count = if digits.is_empty() {
                1
            } else {
                let count = digits
                    .parse::<usize>()
                    .map_err(|_| ParseError::RunCount(digits.clone()))?;
                digits.clear();
                count
            };
            match ch {
                'b' | 'o' => {
                    row.extend(std::iter::repeat_n(u8::from(ch == 'o'), count));
                }
                '$' => {
                    if !row.is_empty() {
                        pattern.push(std::mem::take(&mut row));
                    }
                    // `n$` compresses n - 1 blank rows after the current one.
                    for _ in 1..count {
                        pattern.push(vec![0]);
                    }
                }
                '!' => {
                    pattern.push(std::mem::take(&mut row));
                    break 'body;
                }
                _ => {}
            }
        }
    }
    Ok((extent.0, extent.1, pattern))
}

/// Parse the `x = W, y = H, rule = ...` header line.
fn rle_header(line: &str) -> Result<(usize, usize), ParseError> {
    let mut fields = line.split(',').map(str::trim);
    let width = rle_header_field(fields.next(), "x")
        .ok_or_else(|| ParseError::Header(line.to_string()))?;
    let height = rle_header_field(fields.next(), "y")
        .ok_or_else(|| ParseError::Header(line.to_string()))?;
    Ok((width, height))
}

fn rle_header_field(field: Option<&str>, key: &str) -> Option<usize> {
    let (name, value) = field?.split_once('=')?;
    if name.trim() != key {
        return None;
    }
    value.trim().parse().ok()
}

/// Parse plaintext: one matrix row per line, `.` dead, `O` alive.
pub fn cells(reader: impl BufRead) -> Result<Pattern, ParseError> {
    let mut pattern = Pattern::new();
    for line in reader.lines() {
        let line = line?;
        if line.starts_with('!') {
            continue;
        }
        pattern.push(
            line.chars()
                .filter_map(|ch| match ch {
                    '.' => Some(0),
                    'O' => Some(1),
                    _ => None,
                })
                .collect(),
        );
    }
    Ok(pattern)
}

/// Parse Life 1.06: a list of live-cell coordinates, normalized so the
/// bounding box of all points becomes the matrix extent.
pub fn life(reader: impl BufRead) -> Result<Pattern, ParseError> {
    let mut points: Vec<(i64, i64)> = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.starts_with('#') {
            continue;
        }
        let mut fields = line.split_whitespace();
        let point = fields
            .next()
            .zip(fields.next())
            .and_then(|(x, y)| Some((x.parse().ok()?, y.parse().ok()?)));
        match point {
            Some(point) => points.push(point),
            None => return Err(ParseError::Coordinate(line)),
        }
    }

    let Some(&(first_x, first_y)) = points.first() else {
        return Ok(Pattern::new());
    };
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first_x, first_y, first_x, first_y);
    for &(x, y) in &points {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    let width = (max_x - min_x + 1) as usize;
    let height = (max_y - min_y + 1) as usize;
    let mut pattern = vec![vec![0; width]; height];
    for (x, y) in points {
        pattern[(y - min_y) as usize][(x - min_x) as usize] = 1;
    }
    Ok(pattern)
}
