//! graph6 input: decoding records and streaming them from files.
//!
//! Format
//! - Optional `>>graph6<<` header, then the vertex count `N(n)` and the upper
//!   triangle of the adjacency matrix in column order (`for j in 1..n, i in 0..j`),
//!   packed six bits per printable byte (`63..=126`), most significant bit first.
//! - `N(n)` is one byte `n + 63` for `n <= 62`; otherwise `126` followed by three
//!   6-bit groups, or `126 126` followed by six groups.
//!
//! Reading is strict: a malformed record is an error, never skipped.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::graph::{bit, UndirectedGraph, MAX_VERTICES};

const HEADER: &[u8] = b">>graph6<<";
const BIAS: u8 = 63;
const LONG_ORDER: u8 = 126;

/// Why a single graph6 record could not be decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Graph6Error {
    Empty,
    /// A byte outside the printable range `63..=126`.
    InvalidByte { pos: usize, byte: u8 },
    /// Fewer bytes than the vertex count requires.
    Truncated { expected: usize, found: usize },
    /// More bytes than the vertex count allows.
    TrailingBytes { expected: usize, found: usize },
    TooManyVertices { n: usize },
}

impl fmt::Display for Graph6Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty graph6 record"),
            Self::InvalidByte { pos, byte } => {
                write!(f, "invalid graph6 byte 0x{byte:02x} at offset {pos}")
            }
            Self::Truncated { expected, found } => write!(
                f,
                "truncated graph6 record: expected {expected} bytes, found {found}"
            ),
            Self::TrailingBytes { expected, found } => write!(
                f,
                "trailing bytes in graph6 record: expected {expected} bytes, found {found}"
            ),
            Self::TooManyVertices { n } => write!(
                f,
                "graph6 record has {n} vertices (at most {MAX_VERTICES} supported)"
            ),
        }
    }
}

impl std::error::Error for Graph6Error {}

/// Errors surfaced while streaming graph6 records.
#[derive(Debug)]
pub enum InputError {
    Io(io::Error),
    /// Record on the given 1-based line could not be decoded.
    Format { line: usize, source: Graph6Error },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "i/o error while reading graphs: {e}"),
            Self::Format { line, source } => write!(f, "line {line}: {source}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Format { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for InputError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Decodes one graph6 record (without line terminator).
pub fn decode_graph6(record: &[u8]) -> Result<UndirectedGraph, Graph6Error> {
    let body = record.strip_prefix(HEADER).unwrap_or(record);
    if body.is_empty() {
        return Err(Graph6Error::Empty);
    }
    if let Some(pos) = body.iter().position(|b| !(BIAS..=LONG_ORDER).contains(b)) {
        // Offsets are reported relative to the full record.
        let pos = pos + (record.len() - body.len());
        return Err(Graph6Error::InvalidByte {
            pos,
            byte: record[pos],
        });
    }
    let (n, rest) = decode_order(body)?;
    if n > MAX_VERTICES {
        return Err(Graph6Error::TooManyVertices { n });
    }

    let bits = n * n.saturating_sub(1) / 2;
    let expected = bits.div_ceil(6);
    if rest.len() < expected {
        return Err(Graph6Error::Truncated {
            expected: body.len() - rest.len() + expected,
            found: body.len(),
        });
    }
    if rest.len() > expected {
        return Err(Graph6Error::TrailingBytes {
            expected: body.len() - rest.len() + expected,
            found: body.len(),
        });
    }

    let mut adj = vec![0u64; n];
    let mut k = 0;
    for j in 1..n {
        for i in 0..j {
            let group = rest[k / 6] - BIAS;
            if (group >> (5 - k % 6)) & 1 == 1 {
                adj[i] |= bit(j);
                adj[j] |= bit(i);
            }
            k += 1;
        }
    }
    Ok(UndirectedGraph::from_adj_rows(n, adj))
}

/// Splits `N(n)` off the front of a validated body.
fn decode_order(body: &[u8]) -> Result<(usize, &[u8]), Graph6Error> {
    let (groups, rest) = match body {
        [LONG_ORDER, LONG_ORDER, rest @ ..] => (6, rest),
        [LONG_ORDER, rest @ ..] => (3, rest),
        [first, rest @ ..] => return Ok(((first - BIAS) as usize, rest)),
        [] => return Err(Graph6Error::Empty),
    };
    if rest.len() < groups {
        return Err(Graph6Error::Truncated {
            expected: body.len() - rest.len() + groups,
            found: body.len(),
        });
    }
    let n = rest[..groups]
        .iter()
        .fold(0usize, |acc, &b| (acc << 6) | (b - BIAS) as usize);
    Ok((n, &rest[groups..]))
}

/// One decoded input line.
#[derive(Clone, Debug)]
pub struct Graph6Record {
    /// 1-based line number in the source.
    pub line: usize,
    /// The record as it appeared (trimmed).
    pub text: String,
    pub graph: UndirectedGraph,
}

/// Streams graph6 records from a reader, one per non-blank line.
pub struct Graph6Reader<R> {
    lines: io::Split<R>,
    line: usize,
}

impl<R: BufRead> Graph6Reader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.split(b'\n'),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for Graph6Reader<R> {
    type Item = Result<Graph6Record, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw = match self.lines.next()? {
                Ok(raw) => raw,
                Err(e) => return Some(Err(InputError::Io(e))),
            };
            self.line += 1;
            let record = raw.trim_ascii();
            if record.is_empty() {
                continue;
            }
            let line = self.line;
            return Some(
                decode_graph6(record)
                    .map(|graph| Graph6Record {
                        line,
                        text: String::from_utf8_lossy(record).into_owned(),
                        graph,
                    })
                    .map_err(|source| InputError::Format { line, source }),
            );
        }
    }
}

/// Opens `path` for streaming.
pub fn read_graph6<P: AsRef<Path>>(path: P) -> Result<Graph6Reader<BufReader<File>>, InputError> {
    let file = File::open(path)?;
    Ok(Graph6Reader::new(BufReader::new(file)))
}
