// SPDX-License-Identifier: MPL-2.0
//! Header-only splat asset probe.
//!
//! [`HeaderProbe`] implements [`SplatViewer`] by inspecting an asset without
//! decoding its body:
//!
//! - PLY: the header is parsed with `ply-rs-bw`, reading at most
//!   [`MAX_HEADER_BYTES`]. The vertex element must carry `x`, `y`, `z`; it is
//!   classified as gaussians when it also carries `f_dc_0`, `opacity`,
//!   `scale_0` and `rot_0`. For binary encodings the body length announced by
//!   the header is checked against the file length.
//! - `.splat`: a packed array of 32-byte records.
//!
//! [`SplatViewer`]: crate::application::port::SplatViewer

use crate::application::port::SplatViewer;
use crate::domain::scene::{SplatFormat, SplatKind, SplatScene};
use crate::error::SceneError;
use ply_rs_bw::parser::Parser;
use ply_rs_bw::ply::{DefaultElement, ElementDef, Encoding, PropertyType, ScalarType};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Upper bound on header size; anything longer is treated as malformed.
pub const MAX_HEADER_BYTES: u64 = 64 * 1024;

/// Size of one record in a `.splat` file: position (3×f32), scale (3×f32),
/// color (4×u8), rotation (4×u8).
pub const SPLAT_RECORD_BYTES: u64 = 32;

const GAUSSIAN_PROPERTIES: [&str; 4] = ["f_dc_0", "opacity", "scale_0", "rot_0"];
const POSITION_PROPERTIES: [&str; 3] = ["x", "y", "z"];

/// Viewer adapter that accepts an asset after checking its header.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeaderProbe;

impl SplatViewer for HeaderProbe {
    fn load_scene(&self, path: &Path) -> Result<SplatScene, SceneError> {
        let format = SplatFormat::from_path(path).ok_or_else(|| {
            SceneError::UnsupportedFormat(
                path.extension()
                    .map(|ext| ext.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            )
        })?;

        let file = File::open(path).map_err(|e| SceneError::from_io(path, &e))?;
        let file_len = file
            .metadata()
            .map_err(|e| SceneError::from_io(path, &e))?
            .len();

        let (kind, splat_count) = match format {
            SplatFormat::Ply => probe_ply(BufReader::new(file), file_len)?,
            SplatFormat::Splat => (SplatKind::Gaussians, probe_splat(file_len)?),
        };

        log::debug!(
            "Probed {} as {:?}: {} {}",
            path.display(),
            format,
            splat_count,
            kind
        );

        Ok(SplatScene {
            path: path.to_path_buf(),
            format,
            kind,
            splat_count,
        })
    }
}

/// Counts records in a `.splat` file of `file_len` bytes.
///
/// # Errors
///
/// Returns [`SceneError::Empty`] for an empty file and
/// [`SceneError::Truncated`] if the length is not a whole number of records.
pub fn probe_splat(file_len: u64) -> Result<u64, SceneError> {
    if file_len == 0 {
        return Err(SceneError::Empty);
    }
    let remainder = file_len % SPLAT_RECORD_BYTES;
    if remainder != 0 {
        return Err(SceneError::Truncated {
            expected: file_len - remainder + SPLAT_RECORD_BYTES,
            actual: file_len,
        });
    }
    Ok(file_len / SPLAT_RECORD_BYTES)
}

/// Bytes per record of `element` in a binary body, or `None` if a list
/// property makes the record length variable.
fn stride(element: &ElementDef) -> Option<u64> {
    element
        .properties
        .values()
        .map(|property| match &property.data_type {
            PropertyType::Scalar(scalar) => Some(scalar_size(scalar)),
            PropertyType::List(..) => None,
        })
        .sum()
}

fn scalar_size(scalar: &ScalarType) -> u64 {
    match scalar {
        ScalarType::Char | ScalarType::UChar => 1,
        ScalarType::Short | ScalarType::UShort => 2,
        ScalarType::Double => 8,
        _ => 4,
    }
}

fn malformed(reason: impl Into<String>) -> SceneError {
    SceneError::MalformedHeader(reason.into())
}

fn overflow() -> SceneError {
    malformed("element size overflows")
}

/// Body length announced by a binary header, or `None` when a list property
/// makes it unknowable without decoding.
fn binary_body_len<'a>(
    elements: impl Iterator<Item = &'a ElementDef>,
) -> Result<Option<u64>, SceneError> {
    let mut total: u64 = 0;
    for element in elements {
        let Some(stride) = stride(element) else {
            return Ok(None);
        };
        let count = u64::try_from(element.count).map_err(|_| overflow())?;
        let size = stride.checked_mul(count).ok_or_else(overflow)?;
        total = total.checked_add(size).ok_or_else(overflow)?;
    }
    Ok(Some(total))
}

/// Parses a PLY header from `reader` and validates it against `file_len`.
///
/// At most [`MAX_HEADER_BYTES`] are consumed from `reader`. Returns the vertex
/// classification and the vertex count.
///
/// # Errors
///
/// Returns a [`SceneError`] describing the first problem found.
pub fn probe_ply<R: BufRead>(reader: R, file_len: u64) -> Result<(SplatKind, u64), SceneError> {
    let mut limited = reader.take(MAX_HEADER_BYTES);
    let header = match Parser::<DefaultElement>::new().read_header(&mut limited) {
        Ok(header) => header,
        Err(_) if limited.limit() == 0 => return Err(malformed("header exceeds 64 KiB")),
        Err(err) => return Err(malformed(err.to_string())),
    };
    let header_len = MAX_HEADER_BYTES - limited.limit();

    let vertex = header
        .elements
        .get("vertex")
        .ok_or_else(|| malformed("missing vertex element"))?;
    if let Some(missing) = POSITION_PROPERTIES
        .iter()
        .find(|p| !vertex.properties.contains_key(**p))
    {
        return Err(malformed(format!("vertex element lacks '{missing}'")));
    }
    let vertex_count = u64::try_from(vertex.count).map_err(|_| overflow())?;
    if vertex_count == 0 {
        return Err(SceneError::Empty);
    }

    if header.encoding != Encoding::Ascii {
        if let Some(body) = binary_body_len(header.elements.values())? {
            let expected = header_len.checked_add(body).ok_or_else(overflow)?;
            if file_len < expected {
                return Err(SceneError::Truncated {
                    expected,
                    actual: file_len,
                });
            }
        }
    }

    let kind = if GAUSSIAN_PROPERTIES
        .iter()
        .all(|p| vertex.properties.contains_key(*p))
    {
        SplatKind::Gaussians
    } else {
        SplatKind::PointCloud
    };

    Ok((kind, vertex_count))
}
