use std::fmt::Debug;

use crate::shape::Shape;
use crate::{Interval, Material, Point3, Ray, Vec3};

pub struct Hit<'a> {
    pub point: Point3,
    /// A unit-length normal vector. Always points against the incident ray.
    pub normal: Vec3,
    /// Ray parameter of the hit
    pub t: f64,
    /// Hit the front face or back face of object
    pub front_face: bool,
    /// The material that was hit
    pub material: &'a Material,
}
impl<'a> Hit<'a> {
    pub fn new(
        point: Point3,
        normal: Vec3,
        t: f64,
        front_face: bool,
        material: &'a Material,
    ) -> Self {
        Self {
            point,
            normal,
            t,
            front_face,
            material,
        }
    }

    /// Builds a hit from the geometric outward normal, orienting it against `ray`.
    pub fn ray(
        point: Point3,
        mut normal: Vec3,
        t: f64,
        ray: &Ray,
        material: &'a Material,
    ) -> Self {
        // Dot product is negative when ray hits front face
        let front_face = ray.dir.dot(normal) < 0.;
        // Make suface normal always point against incident ray
        if !front_face {
            normal *= -1.;
        }
        Self::new(point, normal, t, front_face, material)
    }
}

pub trait Hittable: Debug {
    /// Returns the hit determined by a ray. If there is no hit or the hit's `t` isn't
    /// strictly inside `hit_t`, returns `None`.
    fn hit(&self, ray: &Ray, hit_t: Interval) -> Option<Hit>;
}

/// A scene: every member is tested in turn, and the closest hit wins.
#[derive(Default, Debug)]
pub struct HitList(pub Vec<Shape>);
impl HitList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push<T: Into<Shape>>(&mut self, val: T) {
        self.0.push(val.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
impl Hittable for HitList {
    fn hit(&self, ray: &Ray, hit_t: Interval) -> Option<Hit> {
        let mut range = hit_t;
        let mut closest = None;
        for obj in &self.0 {
            if let Some(hit) = obj.hit(ray, range) {
                // Later objects must be closer than this one
                range.max = hit.t;
                closest = Some(hit);
            }
        }
        closest
    }
}
