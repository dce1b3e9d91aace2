use crate::{Hit, HitList, Hittable, Interval, Material, Point3, Ray, Vec3};

/// Every kind of geometry a scene can hold.
#[derive(Debug)]
pub enum Shape {
    Sphere(Sphere),
    List(HitList),
}
impl Hittable for Shape {
    fn hit(&self, ray: &Ray, hit_t: Interval) -> Option<Hit> {
        match self {
            Shape::Sphere(sphere) => sphere.hit(ray, hit_t),
            Shape::List(list) => list.hit(ray, hit_t),
        }
    }
}
impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}
impl From<HitList> for Shape {
    fn from(list: HitList) -> Self {
        Shape::List(list)
    }
}

#[derive(Debug)]
pub struct Sphere {
    pub center: Point3,
    /// A negative radius keeps the same surface but flips its normals inward,
    /// which turns the sphere into the inner wall of a hollow shell.
    pub radius: f64,
    pub material: Material,
}
impl Sphere {
    pub fn new<M: Into<Material>>(center: Point3, radius: f64, material: M) -> Self {
        Self {
            center,
            radius,
            material: material.into(),
        }
    }

    pub fn from<M: Into<Material>>(c: [f64; 3], radius: f64, material: M) -> Self {
        Self::new(c.into(), radius, material)
    }
}
impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, hit_t: Interval) -> Option<Hit> {
        let oc = ray.origin - self.center;
        let a = ray.dir.norm_squared();
        let half_b = oc.dot(ray.dir);
        let c = oc.norm_squared() - self.radius.powi(2);
        let disciminant = half_b.powi(2) - a * c;

        if disciminant < 0. {
            return None;
        }
        let root = disciminant.sqrt();

        // Find the nearest root that lies in the acceptable range
        let mut t = (-half_b - root) / a;
        if !hit_t.surrounds(t) {
            t = (-half_b + root) / a;
            if !hit_t.surrounds(t) {
                return None;
            }
        }

        let point = ray.at(t);
        let outward_normal: Vec3 = (point - self.center) / self.radius;
        Some(Hit::ray(point, outward_normal, t, ray, &self.material))
    }
}
