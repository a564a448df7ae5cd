use crate::foundation::core::CanvasSize;
use crate::foundation::error::{SubpressError, SubpressResult};

/// A raster surface holding premultiplied RGBA8 pixels.
///
/// Both the shared canvas and each painter's scratch layer are surfaces. A
/// freshly allocated surface is fully transparent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    size: CanvasSize,
    data: Vec<u8>,
}

impl Surface {
    pub fn transparent(size: CanvasSize) -> SubpressResult<Self> {
        Ok(Self {
            data: vec![0u8; size.byte_len()?],
            size,
        })
    }

    /// Wrap an existing premultiplied RGBA8 buffer.
    pub fn from_premul_bytes(size: CanvasSize, data: Vec<u8>) -> SubpressResult<Self> {
        if data.len() != size.byte_len()? {
            return Err(SubpressError::paint(
                "surface buffer must be width*height*4 bytes",
            ));
        }
        Ok(Self { size, data })
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Premultiplied RGBA of one pixel. Panics on out-of-bounds coordinates;
    /// callers probe within the surface they allocated.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(x < self.size.width && y < self.size.height);
        let idx = ((y as usize) * (self.size.width as usize) + (x as usize)) * 4;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    /// Source-over composite `src` onto this surface in place.
    pub fn composite_over(&mut self, src: &Surface) -> SubpressResult<()> {
        if self.size != src.size {
            return Err(SubpressError::paint(
                "composite_over expects same-sized surfaces",
            ));
        }
        for (d, s) in self.data.chunks_exact_mut(4).zip(src.data.chunks_exact(4)) {
            let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
            d.copy_from_slice(&out);
        }
        Ok(())
    }

    /// Un-premultiply into straight RGBA8 for PNG encoding.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = px[3] as u16;
            if a == 0 || a == 255 {
                continue;
            }
            for c in 0..3 {
                px[c] = ((px[c] as u16 * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }
}

/// Source-over for one premultiplied pixel.
fn over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }
    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
