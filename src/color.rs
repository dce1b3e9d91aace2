use std::fmt;
use std::ops;

use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::{CrateRng, Interval};

/// Each color value ranges from 0.0 to 1.0, where 1.0 is full brightness.
/// Values outside that range are allowed until the color is quantized.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}
impl Color {
    pub const BLACK: Self = Self::new(0., 0., 0.);
    pub const WHITE: Self = Self::new(1., 1., 1.);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn rand(rng: &mut CrateRng) -> Self {
        let albedo = rng.gen::<[f64; 3]>();
        albedo.into()
    }

    pub fn rand_range(rng: &mut CrateRng, low: f64, high: f64) -> Self {
        let distr = Uniform::new(low, high);
        let albedo = [distr.sample(rng), distr.sample(rng), distr.sample(rng)];
        albedo.into()
    }

    /// Linear interpolation: `t = 0` gives `self`, `t = 1` gives `other`.
    pub fn lerp(self, other: Color, t: f64) -> Self {
        (1. - t) * self + t * other
    }

    /// Applies the gamma 2 transform to each channel.
    pub fn to_gamma(self) -> Self {
        Self::new(linear_to_gamma(self.r), linear_to_gamma(self.g), linear_to_gamma(self.b))
    }

    /// Gamma-corrects and quantizes to 8 bits per channel.
    ///
    /// # Example
    /// ```
    /// # use raytracing::{Color, Rgb8};
    /// assert_eq!(Color::new(0., 0.25, 1.).quantize(), Rgb8::new(0, 128, 255));
    /// ```
    pub fn quantize(self) -> Rgb8 {
        let intensity = Interval::new(0., 0.999);
        let channel = |c: f64| (256. * intensity.clamp(c)) as u8;
        let Color { r, g, b } = self.to_gamma();
        Rgb8::new(channel(r), channel(g), channel(b))
    }
}

/// Negative or NaN input maps to 0 so the output stays in range.
fn linear_to_gamma(linear: f64) -> f64 {
    if linear > 0. {
        linear.sqrt()
    } else {
        0.
    }
}

impl From<[f64; 3]> for Color {
    fn from(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl ops::Add for Color {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}
impl ops::AddAssign for Color {
    fn add_assign(&mut self, rhs: Self) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
    }
}
impl ops::Mul for Color {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}
impl ops::Mul<f64> for Color {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}
impl ops::Mul<Color> for f64 {
    type Output = Color;

    fn mul(self, rhs: Color) -> Self::Output {
        rhs * self
    }
}
impl ops::Div<f64> for Color {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.r / rhs, self.g / rhs, self.b / rhs)
    }
}

/// A 24-bit pixel
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}
impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}
/// Formats as a PPM pixel triple: `R G B`
impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)
    }
}
