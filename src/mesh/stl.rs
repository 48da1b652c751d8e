use super::Triangle;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

const HEADER_TEXT: &[u8] = b"turtlesoup - turtle drawing relief";

/// Write triangles to a binary STL file
///
/// Layout: 80 byte header, little-endian u32 triangle count, then per triangle a normal and
/// three vertices (12 x f32) followed by a zero u16 attribute.
pub fn write_stl(path: &Path, triangles: &[Triangle]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create STL file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    let mut header = [b' '; 80];
    header[..HEADER_TEXT.len()].copy_from_slice(HEADER_TEXT);
    writer.write_all(&header)?;

    let count = u32::try_from(triangles.len()).context("Too many triangles for binary STL")?;
    writer.write_all(&count.to_le_bytes())?;

    for tri in triangles {
        for &n in &tri.normal {
            writer.write_all(&n.to_le_bytes())?;
        }
        for vertex in &tri.vertices {
            for &coord in vertex {
                writer.write_all(&coord.to_le_bytes())?;
            }
        }
        writer.write_all(&[0u8, 0u8])?;
    }

    writer.flush()?;

    Ok(())
}

/// Parse an STL file back and return how many faces it holds
pub fn read_face_count(path: &Path) -> Result<usize> {
    let file =
        File::open(path).with_context(|| format!("Failed to open STL file: {}", path.display()))?;
    let mut reader = BufReader::new(file);
    let mesh = stl_io::read_stl(&mut reader)
        .with_context(|| format!("Failed to parse STL file: {}", path.display()))?;
    Ok(mesh.faces.len())
}

/// Size in bytes of a binary STL holding `triangle_count` triangles
pub fn estimate_stl_size(triangle_count: usize) -> usize {
    // header + count + triangles * (normal + vertices + attribute)
    80 + 4 + triangle_count * 50
}
