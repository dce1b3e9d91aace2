use crate::vec3::{Point3, Vec3};

#[derive(Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    /// Not necessarily unit length
    pub dir: Vec3,
}
impl Ray {
    pub fn new(origin: Point3, dir: Vec3) -> Self {
        Self { origin, dir }
    }

    /// # Example
    /// ```
    /// # use raytracing::{Ray, Vec3};
    /// let r = Ray::new(Vec3::new(1., 0., 0.), Vec3::new(0., 2., 0.));
    /// assert_eq!(r.at(1.5), Vec3::new(1., 3., 0.));
    /// ```
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.dir
    }
}
