//! Wavefront OBJ text parsing.
//!
//! Reads `v`, `vt`, `vn` and `f` records; everything else is skipped.
//! Polygons are fan-triangulated and corners without a normal get the face
//! normal of their polygon.

use smallvec::SmallVec;

use crate::util::{face_normal, Error, Result, Vec2, Vec3};

use super::mesh::{FaceCorner, Mesh, Triangle};

/// Normal reference collected while parsing, resolved once all authored
/// normals are known.
#[derive(Clone, Copy, Debug)]
enum NormalRef {
    Authored(u32),
    Generated(u32),
}

#[derive(Clone, Copy, Debug)]
struct RawCorner {
    vertex: u32,
    texcoord: Option<u32>,
    normal: Option<NormalRef>,
}

#[derive(Default)]
struct ObjParser {
    vertices: Vec<Vec3>,
    texcoords: Vec<Vec2>,
    normals: Vec<Vec3>,
    generated: Vec<Vec3>,
    faces: Vec<[RawCorner; 3]>,
    degenerate_lines: Vec<usize>,
}

/// Parse OBJ text into a triangle mesh.
///
/// Fails with [`Error::MalformedMesh`] naming the first invalid record.
/// Faces whose normal cannot be derived are kept with a zero normal and
/// listed in [`Mesh::degenerate_lines`].
#[tracing::instrument(skip_all, fields(len = text.len()))]
pub fn parse_obj(text: &str) -> Result<Mesh> {
    let mut parser = ObjParser::default();

    // A trailing backslash joins the next line onto the record.
    let mut pending = String::new();
    let mut record_line = 0;
    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        if pending.is_empty() {
            record_line = line_no;
        }
        if let Some(head) = raw.trim_end().strip_suffix('\\') {
            pending.push_str(head);
            pending.push(' ');
            continue;
        }
        if pending.is_empty() {
            parser.record(line_no, raw)?;
        } else {
            pending.push_str(raw);
            parser.record(record_line, &pending)?;
            pending.clear();
        }
    }
    if !pending.is_empty() {
        parser.record(record_line, &pending)?;
    }

    let mesh = parser.finish();
    tracing::debug!(
        vertices = mesh.vertices.len(),
        normals = mesh.normals.len(),
        texcoords = mesh.texcoords.len(),
        triangles = mesh.faces.len(),
        "parsed mesh"
    );
    if !mesh.degenerate_lines.is_empty() {
        tracing::warn!(
            count = mesh.degenerate_lines.len(),
            first_line = mesh.degenerate_lines[0],
            "mesh has zero-area faces, their normals are zero"
        );
    }
    Ok(mesh)
}

impl ObjParser {
    fn record(&mut self, line: usize, text: &str) -> Result<()> {
        let text = text.split('#').next().unwrap_or_default();
        let mut tokens = text.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return Ok(());
        };

        match keyword {
            "v" => {
                let c = floats(line, keyword, tokens, 3, 6)?;
                self.vertices.push(Vec3::new(c[0], c[1], c[2]));
            }
            "vt" => {
                let c = floats(line, keyword, tokens, 1, 3)?;
                self.texcoords
                    .push(Vec2::new(c[0], c.get(1).copied().unwrap_or(0.0)));
            }
            "vn" => {
                let c = floats(line, keyword, tokens, 3, 3)?;
                self.normals.push(Vec3::new(c[0], c[1], c[2]));
            }
            "f" => self.face(line, tokens)?,
            other => tracing::trace!(line, keyword = other, "skipping record"),
        }
        Ok(())
    }

    fn face<'a>(&mut self, line: usize, tokens: impl Iterator<Item = &'a str>) -> Result<()> {
        let mut corners: SmallVec<[RawCorner; 4]> = SmallVec::new();
        for token in tokens {
            corners.push(self.corner(line, token)?);
        }
        if corners.len() < 3 {
            return Err(Error::malformed(
                line,
                format!("face needs at least 3 corners, got {}", corners.len()),
            ));
        }

        if corners.iter().any(|c| c.normal.is_none()) {
            // First fan triangle with non-zero area; collinear leading corners are skipped.
            let position = |c: &RawCorner| self.vertices[c.vertex as usize];
            let origin = position(&corners[0]);
            let normal = corners[1..]
                .windows(2)
                .find_map(|w| face_normal(origin, position(&w[0]), position(&w[1])));
            let normal = normal.unwrap_or_else(|| {
                tracing::debug!(line, "degenerate face");
                self.degenerate_lines.push(line);
                Vec3::ZERO
            });
            let generated = NormalRef::Generated(self.generated.len() as u32);
            self.generated.push(normal);
            for c in corners.iter_mut().filter(|c| c.normal.is_none()) {
                c.normal = Some(generated);
            }
        }

        // Fan from the first corner: (0,1,2), (0,2,3), ...
        for i in 1..corners.len() - 1 {
            self.faces.push([corners[0], corners[i], corners[i + 1]]);
        }
        Ok(())
    }

    /// Parse `v`, `v/t`, `v//n` or `v/t/n`.
    fn corner(&self, line: usize, token: &str) -> Result<RawCorner> {
        let mut parts = token.split('/');
        let vertex = match parts.next() {
            Some(s) if !s.is_empty() => resolve(line, "vertex", s, self.vertices.len())?,
            _ => return Err(Error::malformed(line, format!("corner '{token}' has no vertex index"))),
        };
        let texcoord = match parts.next() {
            None | Some("") => None,
            Some(s) => Some(resolve(line, "texcoord", s, self.texcoords.len())?),
        };
        let normal = match parts.next() {
            None | Some("") => None,
            Some(s) => Some(NormalRef::Authored(resolve(line, "normal", s, self.normals.len())?)),
        };
        if parts.next().is_some() {
            return Err(Error::malformed(line, format!("corner '{token}' has too many components")));
        }
        Ok(RawCorner {
            vertex,
            texcoord,
            normal,
        })
    }

    fn finish(self) -> Mesh {
        let base = self.normals.len() as u32;
        let resolve_normal = |n: Option<NormalRef>| {
            n.map(|n| match n {
                NormalRef::Authored(i) => i,
                NormalRef::Generated(i) => base + i,
            })
        };
        let faces: Vec<Triangle> = self
            .faces
            .iter()
            .map(|tri| {
                tri.map(|c| FaceCorner::new(c.vertex, c.texcoord, resolve_normal(c.normal)))
            })
            .collect();

        let mut normals = self.normals;
        normals.extend_from_slice(&self.generated);

        Mesh {
            vertices: self.vertices,
            normals,
            texcoords: self.texcoords,
            faces,
            degenerate_lines: self.degenerate_lines,
        }
    }
}

/// Resolve a 1-based or negative relative index against `count` declared elements.
fn resolve(line: usize, kind: &str, token: &str, count: usize) -> Result<u32> {
    let index: i64 = token
        .parse()
        .map_err(|_| Error::malformed(line, format!("invalid {kind} index '{token}'")))?;
    let resolved = match index {
        0 => return Err(Error::malformed(line, format!("{kind} index 0 is not valid"))),
        i if i > 0 => i - 1,
        i => count as i64 + i,
    };
    if resolved < 0 || resolved >= count as i64 {
        return Err(Error::malformed(
            line,
            format!("{kind} index {index} out of range ({count} declared so far)"),
        ));
    }
    Ok(resolved as u32)
}

/// Parse between `min` and `max` finite numbers following a keyword.
fn floats<'a>(
    line: usize,
    keyword: &str,
    tokens: impl Iterator<Item = &'a str>,
    min: usize,
    max: usize,
) -> Result<SmallVec<[f32; 6]>> {
    let mut out = SmallVec::new();
    for token in tokens {
        let value: f32 = token
            .parse()
            .ok()
            .filter(|v: &f32| v.is_finite())
            .ok_or_else(|| Error::malformed(line, format!("invalid number '{token}' in '{keyword}'")))?;
        out.push(value);
    }
    if out.len() < min || out.len() > max {
        let expected = if min == max {
            format!("{min}")
        } else {
            format!("{min} to {max}")
        };
        return Err(Error::malformed(
            line,
            format!("'{keyword}' expects {expected} values, got {}", out.len()),
        ));
    }
    Ok(out)
}
