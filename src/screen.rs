use std::io::{self, Write};

use crate::{Color, Rgb8};

pub struct Screen {
    pub width: usize,
    pub height: usize,
    /// Flat, row-major buffer of averaged linear colors with length of `width * height`
    pub buffer: Box<[Color]>,
}
impl Screen {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            buffer: vec![Color::BLACK; width * height].into(),
        }
    }

    /// Gamma-corrects and quantizes each pixel
    pub fn encode(&self) -> Box<[Rgb8]> {
        self.buffer.iter().map(|p| p.quantize()).collect()
    }

    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<Color> {
        self.buffer.chunks_exact_mut(self.width)
    }

    /// Writes the screen as a plain text PPM image.
    pub fn write_ppm<W: Write>(&self, out: W) -> io::Result<W> {
        let mut ppm = PpmWriter::new(out, self.width, self.height)?;
        for pixel in self.encode().iter() {
            ppm.write_pixel(*pixel)?;
        }
        ppm.finish()
    }
}

/// Streams pixels out as a `P3` PPM image.
pub struct PpmWriter<W: Write> {
    out: W,
    remaining: usize,
}
impl<W: Write> PpmWriter<W> {
    /// Writes the header. Exactly `width * height` pixels must follow.
    pub fn new(mut out: W, width: usize, height: usize) -> io::Result<Self> {
        write!(out, "P3\n{} {}\n255\n", width, height)?;
        Ok(Self {
            out,
            remaining: width * height,
        })
    }

    pub fn write_pixel(&mut self, pixel: Rgb8) -> io::Result<()> {
        if self.remaining == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "More pixels written than the PPM header declared",
            ));
        }
        self.remaining -= 1;
        writeln!(self.out, "{}", pixel)
    }

    pub fn finish(mut self) -> io::Result<W> {
        if self.remaining != 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("PPM image is missing {} pixels", self.remaining),
            ));
        }
        self.out.flush()?;
        Ok(self.out)
    }
}
