use std::ops;

use anyhow::{ensure, Result};
use rand_distr::{Distribution, Uniform};

use crate::CrateRng;

/// Positions share the vector type.
pub type Point3 = Vec3;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
const ERR_NORMED_0: &str = "Tried to normalize vector of length 0!";
impl Vec3 {
    pub const ORIGIN: Self = Self::new(0., 0., 0.);
    // The standard basis
    pub const UNIT_X: Self = Self::new(1., 0., 0.);
    pub const UNIT_Y: Self = Self::new(0., 1., 0.);
    pub const UNIT_Z: Self = Self::new(0., 0., 1.);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// # Example
    /// ```
    /// # use raytracing::vec3::Vec3;
    /// let a = Vec3::new(1., 2., 3.);
    /// let b = Vec3::normalized(a);
    /// assert!((b.norm() - 1.).abs() < 1e-12);
    /// ```
    pub fn normalized(v: Vec3) -> Self {
        let normed = v / v.norm();
        debug_assert!(!normed.is_nan(), "{}", ERR_NORMED_0);
        normed
    }

    /// # Example
    /// ```
    /// # use raytracing::vec3::Vec3;
    /// let a = Vec3::new(0., 0., 0.);
    /// assert!(Vec3::checked_normalized(a).is_err());
    /// ```
    pub fn checked_normalized(v: Vec3) -> Result<Self> {
        let norm = v.norm();
        ensure!(norm != 0., ERR_NORMED_0);
        Ok(v / norm)
    }

    /// Each component drawn uniformly from `[0, 1)`.
    pub fn rand(rng: &mut CrateRng) -> Self {
        Self::rand_range(rng, 0., 1.)
    }

    /// Each component drawn uniformly from `[low, high)`.
    pub fn rand_range(rng: &mut CrateRng, low: f64, high: f64) -> Self {
        let distr = Uniform::new(low, high);
        Self::new(distr.sample(rng), distr.sample(rng), distr.sample(rng))
    }

    /// Samples uniformly from inside the unit ball by rejection.
    pub fn rand_in_unit_sphere(rng: &mut CrateRng) -> Self {
        loop {
            let p = Self::rand_range(rng, -1., 1.);
            if p.norm_squared() < 1. {
                return p;
            }
        }
    }

    /// A random direction, uniform over the surface of the unit sphere.
    pub fn rand_unit_vector(rng: &mut CrateRng) -> Self {
        Vec3::normalized(Self::rand_in_unit_sphere(rng))
    }

    /// Samples uniformly from the unit disc in the `x` and `y` dimensions. `z` is 0.
    pub fn rand_in_unit_disk(rng: &mut CrateRng) -> Self {
        let distr = Uniform::new(-1., 1.);
        loop {
            let p = Self::new(distr.sample(rng), distr.sample(rng), 0.);
            if p.norm_squared() < 1. {
                return p;
            }
        }
    }

    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    pub fn norm_squared(&self) -> f64 {
        self.x.powi(2) + self.y.powi(2) + self.z.powi(2)
    }

    /// # Example
    /// ```
    /// # use raytracing::vec3::Vec3;
    /// let a = Vec3::new(4., 8., 10.);
    /// let b = Vec3::new(9., 2., 7.);
    /// assert_eq!(a.dot(b), 122.);
    /// ```
    pub fn dot(&self, rhs: Vec3) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// # Example
    /// ```
    /// # use raytracing::vec3::Vec3;
    /// let a = Vec3::new(2., 3., 4.);
    /// let b = Vec3::new(5., 6., 7.);
    /// assert_eq!(a.cross(b), Vec3::new(-3., 6., -3.));
    /// ```
    pub fn cross(&self, rhs: Vec3) -> Self {
        Self {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    /// True if every component is within `1e-8` of zero.
    pub fn near_zero(&self) -> bool {
        const EPS: f64 = 1e-8;
        self.x.abs() < EPS && self.y.abs() < EPS && self.z.abs() < EPS
    }

    /// Mirror `self` about `normal`. `normal` must be unit length.
    ///
    /// # Example
    /// ```
    /// # use raytracing::vec3::Vec3;
    /// let d = Vec3::new(1., -1., 0.);
    /// assert_eq!(d.reflect(Vec3::UNIT_Y), Vec3::new(1., 1., 0.));
    /// ```
    pub fn reflect(&self, normal: Vec3) -> Self {
        *self - 2. * self.dot(normal) * normal
    }

    /// Bend a unit direction through a surface with unit `normal` by Snell's law.
    pub fn refract(&self, normal: Vec3, eta_i_over_eta_t: f64) -> Self {
        let cos_theta = (-*self).dot(normal).min(1.);
        let refract_perp = eta_i_over_eta_t * (*self + cos_theta * normal);
        let refract_parallel = -normal * (1. - refract_perp.norm_squared()).abs().sqrt();
        refract_perp + refract_parallel
    }

    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl ops::Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl ops::Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}
impl ops::AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl ops::Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
impl ops::SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

/// Multiply the corresponding fields together
impl ops::Mul for Vec3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
            z: self.z * rhs.z,
        }
    }
}

impl ops::Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}
impl ops::Mul<Vec3> for f64 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs * self
    }
}
impl ops::MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl ops::Div<f64> for Vec3 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}
impl ops::DivAssign<f64> for Vec3 {
    fn div_assign(&mut self, rhs: f64) {
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
    }
}
