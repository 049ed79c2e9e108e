//! Textual boundary for the face enumeration kernel.
//!
//! Input is line-oriented: a header `V E`, then `V` lines of
//! `x y deg n_1 ... n_deg` with 1-based neighbour indices. Output lists the
//! face count followed by one `size v_1 ... v_size` line per face, again
//! 1-based. Index conversion happens here; the core is 0-based throughout.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::embedding::{Embedding, Vertex};
use crate::error::{ParseError, Result};
use crate::math::Point2;
use crate::operations::Face;

/// Parses an embedding from the reference textual format.
///
/// # Errors
///
/// Returns a [`ParseError`] for malformed input (missing header, bad
/// tokens, degree or line-count mismatches) and a
/// [`crate::error::TopologyError`] if a neighbour index is out of range.
pub fn parse_embedding<R: BufRead>(reader: R) -> Result<Embedding> {
    let mut lines = reader.lines();

    let header = match lines.next() {
        Some(line) => line.map_err(ParseError::from)?,
        None => return Err(ParseError::MissingHeader.into()),
    };
    let header_tokens: Vec<&str> = header.split_whitespace().collect();
    if header_tokens.len() != 2 {
        return Err(ParseError::TokenCount {
            line: 1,
            expected: 2,
            found: header_tokens.len(),
        }
        .into());
    }
    let vertex_count: usize = parse_token(header_tokens[0], 1)?;
    let edge_count: usize = parse_token(header_tokens[1], 1)?;

    let mut vertices = Vec::with_capacity(vertex_count);
    let mut dart_total = 0;
    for (offset, line) in lines.enumerate() {
        let line = line.map_err(ParseError::from)?;
        let number = offset + 2;
        if vertices.len() == vertex_count {
            return Err(ParseError::VertexLineCount {
                expected: vertex_count,
                found: vertex_count + 1,
            }
            .into());
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 3 {
            return Err(ParseError::TokenCount {
                line: number,
                expected: 3,
                found: tokens.len(),
            }
            .into());
        }
        let x: f64 = parse_token(tokens[0], number)?;
        let y: f64 = parse_token(tokens[1], number)?;
        let degree: usize = parse_token(tokens[2], number)?;
        if tokens.len() != 3 + degree {
            return Err(ParseError::TokenCount {
                line: number,
                expected: 3 + degree,
                found: tokens.len(),
            }
            .into());
        }

        let mut rotation = Vec::with_capacity(degree);
        for token in &tokens[3..] {
            let neighbour: usize = parse_token(token, number)?;
            if neighbour == 0 {
                return Err(ParseError::ZeroIndex { line: number }.into());
            }
            rotation.push(neighbour - 1);
        }
        dart_total += degree;
        vertices.push(Vertex::new(Point2::new(x, y), rotation));
    }

    if vertices.len() != vertex_count {
        return Err(ParseError::VertexLineCount {
            expected: vertex_count,
            found: vertices.len(),
        }
        .into());
    }
    if dart_total != 2 * edge_count {
        return Err(ParseError::EdgeCountMismatch {
            declared: edge_count,
            actual: dart_total,
        }
        .into());
    }

    Ok(Embedding::from_parts(vertices, edge_count)?)
}

/// Writes faces in the reference output format.
///
/// # Errors
///
/// Propagates any I/O error from the writer.
pub fn write_faces<W: Write>(mut writer: W, faces: &[Face]) -> std::io::Result<()> {
    writeln!(writer, "{}", faces.len())?;
    for face in faces {
        write!(writer, "{}", face.len())?;
        for &vertex in &face.vertices {
            write!(writer, " {}", vertex + 1)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

fn parse_token<T: FromStr>(token: &str, line: usize) -> std::result::Result<T, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        token: token.to_owned(),
    })
}
