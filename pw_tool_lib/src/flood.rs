// Copyright 2024 Peter Williams <pwil3058@gmail.com> <pwil3058@bigpond.net.au>
use std::collections::VecDeque;
use std::error::Error;
use std::fmt;

use rayon::prelude::*;

const CHANNELS: usize = 4;

#[derive(Debug, PartialEq, Eq)]
pub enum PixelMapError {
    SizeMismatch { expected: usize, actual: usize },
    OutOfBounds { x: usize, y: usize },
}

impl fmt::Display for PixelMapError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PixelMapError::SizeMismatch { expected, actual } => write!(
                f,
                "pixel buffer holds {actual} bytes but the dimensions need {expected}"
            ),
            PixelMapError::OutOfBounds { x, y } => {
                write!(f, "seed pixel ({x}, {y}) lies outside the image")
            }
        }
    }
}

impl Error for PixelMapError {}

pub type PixelMapResult<T> = Result<T, PixelMapError>;

fn pixel_matches(pixel: &[u8], target: [u8; 3], tolerance: u8) -> bool {
    pixel[0].abs_diff(target[0]) <= tolerance
        && pixel[1].abs_diff(target[1]) <= tolerance
        && pixel[2].abs_diff(target[2]) <= tolerance
}

/// An RGBA image buffer, four bytes per pixel in row major order.
#[derive(Debug, Clone)]
pub struct PixelMap {
    width: usize,
    height: usize,
    data: Box<[u8]>,
}

impl PixelMap {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> PixelMapResult<Self> {
        let expected = width * height * CHANNELS;
        if data.len() != expected {
            return Err(PixelMapError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data: data.into_boxed_slice(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Box<[u8]> {
        self.data
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        (y * self.width + x) * CHANNELS
    }

    /// Make the region of colour around a seed pixel transparent.
    ///
    /// Every pixel reachable from `(x, y)` through four way neighbours whose
    /// red, green and blue channels are all within `tolerance` of the seed
    /// pixel's gets its alpha channel zeroed.  With `aggressive` set, every
    /// matching pixel in the whole image is cleared as well, connected to the
    /// seed or not.  Returns how many pixels were cleared.
    pub fn clear_color_region(
        &mut self,
        x: usize,
        y: usize,
        tolerance: u8,
        aggressive: bool,
    ) -> PixelMapResult<usize> {
        if x >= self.width || y >= self.height {
            return Err(PixelMapError::OutOfBounds { x, y });
        }
        let seed = self.offset(x, y);
        let target = [self.data[seed], self.data[seed + 1], self.data[seed + 2]];

        let mut visited = vec![false; self.width * self.height].into_boxed_slice();
        let mut queue = VecDeque::new();
        queue.push_back((x, y));
        let mut cleared = 0;

        while let Some((current_x, current_y)) = queue.pop_front() {
            let key = current_y * self.width + current_x;
            if visited[key] {
                continue;
            }
            let offset = key * CHANNELS;
            if !pixel_matches(&self.data[offset..offset + CHANNELS], target, tolerance) {
                continue;
            }
            // Only matching pixels are marked; edge pixels may be retested.
            visited[key] = true;
            self.data[offset + 3] = 0;
            cleared += 1;

            if current_x + 1 < self.width {
                queue.push_back((current_x + 1, current_y));
            }
            if current_x > 0 {
                queue.push_back((current_x - 1, current_y));
            }
            if current_y + 1 < self.height {
                queue.push_back((current_x, current_y + 1));
            }
            if current_y > 0 {
                queue.push_back((current_x, current_y - 1));
            }
        }

        if aggressive {
            cleared += self
                .data
                .par_chunks_exact_mut(CHANNELS)
                .zip(visited.par_iter())
                .map(|(pixel, visited)| {
                    if *visited || !pixel_matches(pixel, target, tolerance) {
                        0
                    } else {
                        pixel[3] = 0;
                        1
                    }
                })
                .sum::<usize>();
        }

        Ok(cleared)
    }
}
