//! Raw PBM (`P4`) export.
//!
//! An animation is written as consecutive `P4` images in one file, which Netpbm
//! readers accept as a multi-image stream. Each header carries a
//! `# frame <i> fps <fps>` comment right after the magic number so the timing
//! survives.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use life_core::DenseGrid;
use tracing::info;

use crate::{Animation, RenderError, RenderResult};

const MAGIC: &[u8; 2] = b"P4";

/// Bytes per packed raster row.
const fn row_bytes(width: usize) -> usize {
    width.div_ceil(8)
}

/// Write one frame as a raw PBM image. Live cells are black (bit set).
pub fn write_frame<W: Write>(out: &mut W, grid: &DenseGrid, comment: &str) -> RenderResult<()> {
    out.write_all(MAGIC)?;
    writeln!(out)?;
    if !comment.is_empty() {
        writeln!(out, "# {comment}")?;
    }
    writeln!(out, "{} {}", grid.width(), grid.height())?;

    let mut packed = vec![0u8; row_bytes(grid.width())];
    for row in grid.rows() {
        packed.fill(0);
        for (col, &alive) in row.iter().enumerate() {
            if alive {
                packed[col / 8] |= 0x80 >> (col % 8);
            }
        }
        out.write_all(&packed)?;
    }

    Ok(())
}

/// Write every frame of `animation` to `out`.
pub fn write_animation<W: Write>(out: &mut W, animation: &Animation) -> RenderResult<()> {
    for (i, frame) in animation.frames.iter().enumerate() {
        write_frame(out, frame, &format!("frame {} fps {}", i, animation.fps))?;
    }
    Ok(())
}

/// Export `animation` to `<dir>/<file stem>.pbm`, creating `dir` if needed.
pub fn export(animation: &Animation, dir: &Path) -> RenderResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.pbm", animation.file_stem()));

    let mut out = BufWriter::new(File::create(&path)?);
    write_animation(&mut out, animation)?;
    out.flush()?;

    info!(
        path = %path.display(),
        frames = animation.len(),
        fps = animation.fps,
        "exported animation"
    );

    Ok(path)
}

/// Decode a stream of raw PBM images back into grids.
pub fn read_frames(bytes: &[u8]) -> RenderResult<Vec<DenseGrid>> {
    let mut reader = Reader { bytes, pos: 0 };
    let mut frames = Vec::new();

    while reader.pos < bytes.len() {
        frames.push(reader.frame()?);
        reader.skip_whitespace();
    }

    Ok(frames)
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Reader<'_> {
    fn frame(&mut self) -> RenderResult<DenseGrid> {
        let magic = self.bytes.get(self.pos..self.pos + 2);
        if magic != Some(MAGIC.as_slice()) {
            return Err(RenderError::Decode(format!(
                "expected P4 magic at byte {}",
                self.pos
            )));
        }
        self.pos += 2;

        let width = self.header_number()?;
        let height = self.header_number()?;
        // Exactly one whitespace byte separates the header from the raster
        self.pos += 1;

        let stride = row_bytes(width);
        let raster = self
            .bytes
            .get(self.pos..self.pos + stride * height)
            .ok_or_else(|| RenderError::Decode("truncated raster".to_string()))?;
        self.pos += stride * height;

        let mut grid = DenseGrid::new(height, width);
        for (row, packed) in raster.chunks_exact(stride.max(1)).take(height).enumerate() {
            for col in 0..width {
                grid.set(row, col, packed[col / 8] & (0x80 >> (col % 8)) != 0);
            }
        }
        Ok(grid)
    }

    /// Skip whitespace and `#` comments, then read a decimal number.
    fn header_number(&mut self) -> RenderResult<usize> {
        loop {
            self.skip_whitespace();
            if self.bytes.get(self.pos) != Some(&b'#') {
                break;
            }
            while self.bytes.get(self.pos).is_some_and(|&b| b != b'\n') {
                self.pos += 1;
            }
        }

        let start = self.pos;
        while self.bytes.get(self.pos).is_some_and(u8::is_ascii_digit) {
            self.pos += 1;
        }
        std::str::from_utf8(&self.bytes[start..self.pos])
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| RenderError::Decode(format!("expected number at byte {start}")))
    }

    fn skip_whitespace(&mut self) {
        while self.bytes.get(self.pos).is_some_and(u8::is_ascii_whitespace) {
            self.pos += 1;
        }
    }
}
