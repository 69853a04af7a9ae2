//! Superficial structural checks of graph files.
//!
//! Only the header is parsed as numbers. Edge lines count when they have at least
//! two fields, and the declared edge count is never compared with the lines found.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{IoContext, SetupError, SetupResult};
use crate::{Edge, Node, Weight};

/// Outcome of checking one file. Malformed input is a value here, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validation {
    /// `order` is the header's first field in canonical decimal form, unbounded in size.
    Valid { order: String, edges_found: usize },
    Missing,
    Empty,
    /// The first line has fewer than two fields.
    BadHeader,
    /// A header field is not an integer.
    Malformed(String),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        match self {
            Validation::Valid { .. } => true,
            _ => false,
        }
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validation::Valid { order, edges_found } => {
                write!(f, "Valid: {} nodes, {} edges found", order, edges_found)
            }
            Validation::Missing => write!(f, "File does not exist"),
            Validation::Empty => write!(f, "File is empty"),
            Validation::BadHeader => write!(f, "Invalid format: first line should contain order and num_edges"),
            Validation::Malformed(detail) => write!(f, "Error reading file: {}", detail),
        }
    }
}

/// Splits on `\n`, `\r\n` and a bare `\r`. A trailing terminator adds no empty line.
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Canonical decimal form of an integer of any size: optional sign, ASCII digits,
/// leading zeros dropped.
fn parse_integer(field: &str) -> Option<String> {
    let (negative, digits) = match field.as_bytes().first() {
        Some(b'-') => (true, &field[1..]),
        Some(b'+') => (false, &field[1..]),
        _ => (false, field),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let magnitude = digits.trim_start_matches('0');
    Some(match (magnitude.is_empty(), negative) {
        (true, _) => "0".to_string(),
        (false, true) => format!("-{}", magnitude),
        (false, false) => magnitude.to_string(),
    })
}

fn parse_header(line: &str) -> Result<Option<(String, String)>, String> {
    let mut fields = line.split_whitespace();
    let (order, num_edges) = match (fields.next(), fields.next()) {
        (Some(order), Some(num_edges)) => (order, num_edges),
        _ => return Ok(None),
    };
    let order = parse_integer(order).ok_or_else(|| format!("invalid literal for order: {:?}", order))?;
    let num_edges =
        parse_integer(num_edges).ok_or_else(|| format!("invalid literal for num_edges: {:?}", num_edges))?;
    Ok(Some((order, num_edges)))
}

/// Validates the file at `path`. Errors only on I/O failures such as a permission denial
/// or non UTF-8 content.
pub fn validate_graph_file(path: &Path) -> SetupResult<Validation> {
    if !path.exists() {
        return Ok(Validation::Missing);
    }
    let text = fs::read_to_string(path).with_path(path)?;
    let lines = split_lines(&text);

    let header = match lines.first() {
        None => return Ok(Validation::Empty),
        Some(line) => line,
    };
    let order = match parse_header(header) {
        Ok(Some((order, _declared_edges))) => order,
        Ok(None) => return Ok(Validation::BadHeader),
        Err(detail) => return Ok(Validation::Malformed(detail)),
    };

    let edges_found = lines[1..].iter().filter(|line| line.split_whitespace().nth(1).is_some()).count();
    Ok(Validation::Valid { order, edges_found })
}

/// Never fails: I/O errors are reported as an invalid file with the error embedded.
pub fn check_graph_file(path: &Path) -> (bool, String) {
    match validate_graph_file(path) {
        Ok(validation) => {
            if !validation.is_valid() {
                warn!("{}: {}", path.display(), validation);
            }
            (validation.is_valid(), validation.to_string())
        }
        Err(SetupError::Io { source, .. }) => {
            warn!("{}: {}", path.display(), source);
            (false, Validation::Malformed(source.to_string()).to_string())
        }
        Err(other) => (false, Validation::Malformed(other.to_string()).to_string()),
    }
}

/// A fully parsed graph file.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphFile {
    pub order: u32,
    pub declared_edges: u32,
    pub edges: Vec<Edge>,
}

impl GraphFile {
    pub fn is_weighted(&self) -> bool {
        !self.edges.is_empty() && self.edges.iter().all(|e| e.weight.is_some())
    }
}

fn invalid_data(line_no: usize, message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, format!("line {}: {}", line_no, message))
}

fn parse_field<T: std::str::FromStr>(field: Option<&str>, name: &str, line_no: usize) -> io::Result<T>
where
    T::Err: fmt::Display,
{
    let field = field.ok_or_else(|| invalid_data(line_no, format!("missing {}", name)))?;
    field.parse().map_err(|e| invalid_data(line_no, format!("invalid {} {:?}: {}", name, field, e)))
}

/// Loads every edge of a graph file, requiring numeric fields throughout.
/// Blank lines and lines starting with `#` are skipped.
pub fn load_graph_file(path: &Path) -> SetupResult<GraphFile> {
    let text = fs::read_to_string(path).with_path(path)?;
    let mut lines = split_lines(&text).into_iter().enumerate();

    let (order, declared_edges) = match lines.next() {
        Some((_, line)) => {
            let mut text = line.split_whitespace();
            let order: u32 = parse_field(text.next(), "order", 1).with_path(path)?;
            let edges: u32 = parse_field(text.next(), "num_edges", 1).with_path(path)?;
            (order, edges)
        }
        None => return Err(SetupError::io(path, invalid_data(1, "file is empty".to_string()))),
    };

    let mut edges = Vec::with_capacity(declared_edges as usize);
    for (index, line) in lines {
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let line_no = index + 1;
        let mut text = line.split_whitespace();
        let source: Node = parse_field(text.next(), "source", line_no).with_path(path)?;
        let target: Node = parse_field(text.next(), "target", line_no).with_path(path)?;
        let weight = match text.next() {
            Some(field) => Some(parse_field::<Weight>(Some(field), "weight", line_no).with_path(path)?),
            None => None,
        };
        edges.push(Edge { source, target, weight });
    }
    Ok(GraphFile { order, declared_edges, edges })
}
