pub mod camera;
pub mod color;
pub mod config;
pub mod hit;
pub mod interval;
pub mod material;
pub mod ray;
pub mod screen;
pub mod shape;
pub mod vec3;

pub use camera::{ray_color, Camera, CameraBuilder};
pub use color::{Color, Rgb8};
pub use hit::{Hit, HitList, Hittable};
pub use interval::Interval;
pub use material::{Dielectric, Lambertian, Material, Metal, Scatter};
pub use ray::Ray;
pub use screen::{PpmWriter, Screen};
pub use shape::{Shape, Sphere};
pub use vec3::{Point3, Vec3};

/// The random number generator every sampler draws from.
/// Seed it with `CrateRng::seed_from_u64` for reproducible renders.
pub type CrateRng = rand::rngs::SmallRng;
