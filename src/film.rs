use crate::aliases::Vec3;
use std::io::{self, Read, Write};
use std::path::Path;

/// Final per-pixel colors of a render, row-major from the upper left pixel,
/// in linear color.
#[derive(Clone, Debug, PartialEq)]
pub struct Film {
    width: usize,
    height: usize,
    pixels: Vec<Vec3>,
}

/// Gamma 2 encoding of a linear channel into [0, 1). NaN is mapped to 0.
pub fn tone_map(linear: f64) -> f64 {
    if linear.is_nan() || linear <= 0.0 {
        return 0.0;
    }
    linear.sqrt().clamp(0.0, 0.999)
}

fn quantize(linear: f64) -> u8 {
    (256.0 * tone_map(linear)) as u8
}

/// An image as stored in a plain-text (P3) ppm: integer channels in
/// `[0, max_value]`, row-major from the upper left pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ppm {
    width: usize,
    height: usize,
    max_value: u32,
    channels: Vec<u32>,
}

fn invalid_data(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}

impl Ppm {
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn write<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "P3")?;
        writeln!(out, "{} {}", self.width, self.height)?;
        writeln!(out, "{}", self.max_value)?;
        for rgb in self.channels.chunks(3) {
            writeln!(out, "{} {} {}", rgb[0], rgb[1], rgb[2])?;
        }
        Ok(())
    }
    /// Parses a P3 ppm. Lines starting with `#` are comments.
    pub fn read<R: Read>(input: &mut R) -> io::Result<Ppm> {
        let mut text = String::new();
        input.read_to_string(&mut text)?;
        let mut lines = text
            .trim_start_matches('\u{feff}')
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty());
        match lines.next() {
            Some("P3") => {}
            other => {
                return Err(invalid_data(format!(
                    "not a P3 ppm (magic number {:?})",
                    other.unwrap_or("")
                )))
            }
        }
        let mut tokens = lines
            .filter(|line| !line.starts_with('#'))
            .flat_map(str::split_whitespace);
        let mut next_number = |what: &str| -> io::Result<u64> {
            let token = tokens
                .next()
                .ok_or_else(|| invalid_data(format!("missing {}", what)))?;
            token
                .parse::<u64>()
                .map_err(|e| invalid_data(format!("bad {} '{}': {}", what, token, e)))
        };
        let width = next_number("width")? as usize;
        let height = next_number("height")? as usize;
        let max_value = next_number("max value")?;
        if max_value == 0 || max_value > u64::from(u16::MAX) {
            return Err(invalid_data(format!("max value {} out of range", max_value)));
        }
        let channel_cnt = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(3))
            .ok_or_else(|| invalid_data(format!("image too large: {}x{}", width, height)))?;
        let mut channels = Vec::with_capacity(channel_cnt.min(1 << 24));
        for _ in 0..channel_cnt {
            let value = next_number("channel value")?;
            if value > max_value {
                return Err(invalid_data(format!(
                    "channel value {} exceeds max value {}",
                    value, max_value
                )));
            }
            channels.push(value as u32);
        }
        if tokens.next().is_some() {
            return Err(invalid_data(format!(
                "more than {} channel values",
                channel_cnt
            )));
        }
        Ok(Ppm {
            width,
            height,
            max_value: max_value as u32,
            channels,
        })
    }
    pub fn open(path: &Path) -> io::Result<Ppm> {
        let mut file = io::BufReader::new(std::fs::File::open(path)?);
        Ppm::read(&mut file)
    }
    /// Mean squared error of the channels scaled to [0, 1],
    /// or None when the sizes differ.
    pub fn mse(&self, other: &Ppm) -> Option<f64> {
        if (self.width, self.height) != (other.width, other.height) {
            return None;
        }
        let (scale_a, scale_b) = (1.0 / self.max_value as f64, 1.0 / other.max_value as f64);
        let sum: f64 = self
            .channels
            .iter()
            .zip(other.channels.iter())
            .map(|(&a, &b)| (a as f64 * scale_a - b as f64 * scale_b).powi(2))
            .sum();
        Some(sum / self.channels.len().max(1) as f64)
    }
}

impl Film {
    pub fn new(width: usize, height: usize) -> Self {
        Film {
            width,
            height,
            pixels: vec![Vec3::zeros(); width * height],
        }
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn pixel(&self, i: usize, j: usize) -> &Vec3 {
        &self.pixels[i + j * self.width]
    }
    /// Replaces the j-th row.
    pub fn set_row(&mut self, j: usize, row: &[Vec3]) {
        debug_assert_eq!(row.len(), self.width);
        let start = j * self.width;
        self.pixels[start..start + self.width].copy_from_slice(row);
    }
    /// Tone mapped and quantized to 8 bits per channel.
    pub fn to_ppm(&self) -> Ppm {
        Ppm {
            width: self.width,
            height: self.height,
            max_value: 255,
            channels: self
                .pixels
                .iter()
                .flat_map(|col| (0..3).map(move |c| u32::from(quantize(col[c]))))
                .collect(),
        }
    }
    /// Writes a plain-text (P3) ppm.
    pub fn write_ppm<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.to_ppm().write(out)
    }
    pub fn save_png(&self, path: &Path) -> image::ImageResult<()> {
        let mut buffer: Vec<u8> = Vec::with_capacity(self.pixels.len() * 3);
        for col in &self.pixels {
            buffer.extend_from_slice(&[quantize(col[0]), quantize(col[1]), quantize(col[2])]);
        }
        image::save_buffer(
            path,
            &buffer,
            self.width as u32,
            self.height as u32,
            image::ColorType::Rgb8,
        )
    }
    /// Saves as png when the extension says so, as ppm otherwise.
    pub fn save(&self, path: &Path) -> image::ImageResult<()> {
        let is_png = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("png"));
        if is_png {
            self.save_png(path)
        } else {
            let mut file = io::BufWriter::new(std::fs::File::create(path)?);
            self.write_ppm(&mut file)?;
            file.flush()?;
            Ok(())
        }
    }
    /// Mean squared error of the images the two films write out.
    pub fn mse(&self, other: &Film) -> Option<f64> {
        self.to_ppm().mse(&other.to_ppm())
    }
}
