use cgmath::{Vector2, Vector3};

use crate::model::{Mesh, Polygon};

use super::ParseError;

const VERTEX_TOKEN: &str = "v";
const TEXTURE_TOKEN: &str = "vt";
const NORMAL_TOKEN: &str = "vn";
const FACE_TOKEN: &str = "f";

/// Parse OBJ text into a [`Mesh`].
///
/// Single pass over the lines; the first whitespace token of each line
/// selects the record kind. Any field-level failure aborts the parse with a
/// [`ParseError`] naming the offending 1-based line.
pub fn read(content: &str) -> Result<Mesh, ParseError> {
    let mut mesh = Mesh::new();

    for (index, raw_line) in content.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut words = line.split_whitespace();
        let Some(token) = words.next() else {
            continue;
        };
        let fields: Vec<&str> = words.collect();

        match token {
            VERTEX_TOKEN => mesh.vertices.push(parse_vertex(&fields, line_number)?),
            TEXTURE_TOKEN => mesh
                .texture_coords
                .push(parse_texture_coord(&fields, line_number)?),
            NORMAL_TOKEN => mesh.normals.push(parse_normal(&fields, line_number)?),
            FACE_TOKEN => mesh.polygons.push(parse_face(&fields, line_number)?),
            _ => {}
        }
    }

    Ok(mesh)
}

/// Parse a `v` record: at least 3 numeric fields, first three used as x/y/z.
pub(crate) fn parse_vertex(fields: &[&str], line: usize) -> Result<Vector3<f32>, ParseError> {
    if fields.len() < 3 {
        return Err(ParseError::new(
            line,
            format!("too few vertex arguments: expected 3, got {}", fields.len()),
        ));
    }
    Ok(Vector3::new(
        parse_float(fields[0], line)?,
        parse_float(fields[1], line)?,
        parse_float(fields[2], line)?,
    ))
}

/// Parse a `vt` record: at least 2 numeric fields (u, v); extras ignored.
pub(crate) fn parse_texture_coord(fields: &[&str], line: usize) -> Result<Vector2<f32>, ParseError> {
    if fields.len() < 2 {
        return Err(ParseError::new(
            line,
            format!(
                "too few texture coordinate arguments: expected at least 2, got {}",
                fields.len()
            ),
        ));
    }
    Ok(Vector2::new(
        parse_float(fields[0], line)?,
        parse_float(fields[1], line)?,
    ))
}

/// Parse a `vn` record: exactly 3 numeric fields.
pub(crate) fn parse_normal(fields: &[&str], line: usize) -> Result<Vector3<f32>, ParseError> {
    if fields.len() != 3 {
        return Err(ParseError::new(
            line,
            format!("normal expects exactly 3 components, got {}", fields.len()),
        ));
    }
    Ok(Vector3::new(
        parse_float(fields[0], line)?,
        parse_float(fields[1], line)?,
        parse_float(fields[2], line)?,
    ))
}

/// Parse a numeric field, tolerating decimal commas and stray non-numeric
/// decoration. A field that reduces to nothing after cleanup is an error.
fn parse_float(field: &str, line: usize) -> Result<f32, ParseError> {
    let cleaned: String = field
        .replace(',', ".")
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '-' | '+'))
        .collect();

    if cleaned.is_empty() {
        return Err(ParseError::new(
            line,
            format!("empty coordinate value: '{field}'"),
        ));
    }

    cleaned.parse::<f32>().map_err(|_| {
        ParseError::new(line, format!("failed to parse coordinate value: '{field}'"))
    })
}

/// Parse an `f` record: at least 3 face words of the form
/// `vertex[/[texture][/normal]]` with 1-based indices.
pub(crate) fn parse_face(fields: &[&str], line: usize) -> Result<Polygon, ParseError> {
    if fields.is_empty() {
        return Err(ParseError::new(line, "face definition is empty"));
    }

    let mut vertex_indices = Vec::with_capacity(fields.len());
    let mut texture_indices = Vec::new();
    let mut normal_indices = Vec::new();

    for word in fields {
        parse_face_word(
            word,
            &mut vertex_indices,
            &mut texture_indices,
            &mut normal_indices,
            line,
        )?;
    }

    if vertex_indices.len() < 3 {
        return Err(ParseError::new(
            line,
            format!(
                "polygon must have at least 3 vertices, found {}",
                vertex_indices.len()
            ),
        ));
    }

    // A face mixing attributed and bare words would leave the parallel lists
    // shorter than the vertex list, which no consumer is prepared for.
    if !texture_indices.is_empty() && texture_indices.len() != vertex_indices.len() {
        return Err(ParseError::new(
            line,
            "face mixes words with and without texture indices",
        ));
    }
    if !normal_indices.is_empty() && normal_indices.len() != vertex_indices.len() {
        return Err(ParseError::new(
            line,
            "face mixes words with and without normal indices",
        ));
    }

    Ok(Polygon::from_indices(
        vertex_indices,
        texture_indices,
        normal_indices,
    ))
}

/// Split one face word on `/` into vertex, optional texture and optional
/// normal indices, converting each from 1-based to 0-based.
fn parse_face_word(
    word: &str,
    vertex_indices: &mut Vec<usize>,
    texture_indices: &mut Vec<usize>,
    normal_indices: &mut Vec<usize>,
    line: usize,
) -> Result<(), ParseError> {
    let parts: Vec<&str> = word.split('/').collect();

    if parts.len() > 3 {
        return Err(ParseError::new(
            line,
            format!("invalid face element '{word}': {} parts", parts.len()),
        ));
    }
    if parts[0].is_empty() {
        return Err(ParseError::new(
            line,
            format!("missing vertex index in face element '{word}'"),
        ));
    }

    vertex_indices.push(parse_index(parts[0], line)?);

    if parts.len() >= 2 && !parts[1].is_empty() {
        texture_indices.push(parse_index(parts[1], line)?);
    }
    if parts.len() == 3 && !parts[2].is_empty() {
        normal_indices.push(parse_index(parts[2], line)?);
    }

    Ok(())
}

/// Parse a 1-based face index to its 0-based form. Zero and negative values
/// are rejected; relative (negative) indexing is not supported.
fn parse_index(field: &str, line: usize) -> Result<usize, ParseError> {
    let value: i64 = field
        .trim()
        .parse()
        .map_err(|_| ParseError::new(line, format!("failed to parse index: '{field}'")))?;

    if value < 1 {
        return Err(ParseError::new(
            line,
            format!("face index must be positive, got {value} (relative indexing is not supported)"),
        ));
    }

    Ok((value - 1) as usize)
}
