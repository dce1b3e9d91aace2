use rand::Rng;

use crate::{Color, CrateRng, Hit, Ray, Vec3};

/// A scattered ray and its color information
#[derive(Clone, Debug)]
pub struct Scatter {
    pub attenuation: Color,
    pub ray: Ray,
}
impl Scatter {
    pub fn new(attenuation: Color, ray: Ray) -> Self {
        Self { attenuation, ray }
    }
}

/// Surface response to light. A material will either absorb a ray (`None`) or scatter it.
#[derive(Clone, Debug)]
pub enum Material {
    Lambertian(Lambertian),
    Metal(Metal),
    Dielectric(Dielectric),
}
impl Material {
    pub fn scatter(&self, ray: &Ray, hit: &Hit, rng: &mut CrateRng) -> Option<Scatter> {
        match self {
            Material::Lambertian(m) => m.scatter(ray, hit, rng),
            Material::Metal(m) => m.scatter(ray, hit, rng),
            Material::Dielectric(m) => m.scatter(ray, hit, rng),
        }
    }
}
impl From<Lambertian> for Material {
    fn from(m: Lambertian) -> Self {
        Material::Lambertian(m)
    }
}
impl From<Metal> for Material {
    fn from(m: Metal) -> Self {
        Material::Metal(m)
    }
}
impl From<Dielectric> for Material {
    fn from(m: Dielectric) -> Self {
        Material::Dielectric(m)
    }
}

#[derive(Clone, Debug)]
/// Diffuse reflection
pub struct Lambertian {
    pub albedo: Color,
}
impl Lambertian {
    pub fn new<T: Into<Color>>(albedo: T) -> Self {
        Self {
            albedo: albedo.into(),
        }
    }

    pub fn scatter(&self, _ray: &Ray, hit: &Hit, rng: &mut CrateRng) -> Option<Scatter> {
        let mut scatter_dir = hit.normal + Vec3::rand_unit_vector(rng);
        // The random vector nearly cancelled the normal
        if scatter_dir.near_zero() {
            scatter_dir = hit.normal;
        }
        let scattered = Ray::new(hit.point, scatter_dir);
        Some(Scatter::new(self.albedo, scattered))
    }
}

#[derive(Clone, Debug)]
pub struct Metal {
    pub albedo: Color,
    /// The fuzziness of the Metal. Is between `0.0` and `1.0`
    pub fuzz: f64,
}
impl Metal {
    pub fn new(albedo: Color, fuzz: f64) -> Self {
        let fuzz = fuzz.max(0.).min(1.);
        Self { albedo, fuzz }
    }

    pub fn from(a: [f64; 3], fuzz: f64) -> Self {
        Self::new(a.into(), fuzz)
    }

    pub fn scatter(&self, ray: &Ray, hit: &Hit, rng: &mut CrateRng) -> Option<Scatter> {
        let reflected = Vec3::normalized(ray.dir).reflect(hit.normal);
        let fuzzed = reflected + self.fuzz * Vec3::rand_unit_vector(rng);

        // The fuzz pushed the ray below the surface; absorb it.
        if fuzzed.dot(hit.normal) <= 0. {
            return None;
        }
        Some(Scatter::new(self.albedo, Ray::new(hit.point, fuzzed)))
    }
}

#[derive(Clone, Debug)]
pub struct Dielectric {
    pub ref_index: f64,
}
impl Dielectric {
    pub fn new(ref_index: f64) -> Self {
        debug_assert!(ref_index > 0., "Refractive index must be positive");
        Self { ref_index }
    }

    /// Schlick's approximation of the reflectance at incidence `cos`.
    pub fn schlick(cos: f64, eta_i_over_eta_t: f64) -> f64 {
        let r0 = (1. - eta_i_over_eta_t) / (1. + eta_i_over_eta_t);
        let r0 = r0 * r0;
        r0 + (1. - r0) * (1. - cos).powi(5)
    }

    pub fn scatter(&self, ray: &Ray, hit: &Hit, rng: &mut CrateRng) -> Option<Scatter> {
        let eta_i_over_eta_t = if hit.front_face {
            1. / self.ref_index
        } else {
            self.ref_index
        };
        let unit_dir = Vec3::normalized(ray.dir);
        let cos_theta = (-unit_dir).dot(hit.normal).min(1.0);
        let sin_theta = (1. - cos_theta.powi(2)).sqrt();

        let total_internal = eta_i_over_eta_t * sin_theta > 1.0;
        let dir = if total_internal
            || rng.gen::<f64>() < Self::schlick(cos_theta, eta_i_over_eta_t)
        {
            unit_dir.reflect(hit.normal)
        } else {
            unit_dir.refract(hit.normal, eta_i_over_eta_t)
        };

        let scattered = Ray::new(hit.point, dir);
        Some(Scatter::new(Color::WHITE, scattered))
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;

    use super::*;

    const EPS: f64 = 1e-9;

    fn rng() -> CrateRng {
        CrateRng::seed_from_u64(42)
    }

    fn hit_at_origin(material: &Material, front_face: bool) -> Hit {
        Hit::new(Vec3::ORIGIN, Vec3::UNIT_Y, 1., front_face, material)
    }

    fn within_unit(c: Color) -> bool {
        c.r <= 1. && c.g <= 1. && c.b <= 1.
    }

    #[test]
    fn lambertian_scatters_above_surface() {
        let mut rng = rng();
        let material: Material = Lambertian::new([0.9, 0.5, 0.1]).into();
        let hit = hit_at_origin(&material, true);
        let incoming = Ray::new(Vec3::new(0., 1., 1.), Vec3::new(0., -1., -1.));

        for _ in 0..1000 {
            let scatter = material.scatter(&incoming, &hit, &mut rng).unwrap();
            assert!(within_unit(scatter.attenuation));
            assert_eq!(scatter.ray.origin, hit.point);
            assert!(!scatter.ray.dir.near_zero());
            // normal + unit vector never points below the tangent plane
            assert!(scatter.ray.dir.dot(hit.normal) >= 0.);
        }
    }

    #[test]
    fn polished_metal_is_a_mirror() {
        let mut rng = rng();
        let material: Material = Metal::from([0.8, 0.6, 0.2], 0.).into();
        let hit = hit_at_origin(&material, true);
        let incoming = Ray::new(Vec3::new(-1., 1., 0.), Vec3::new(2., -2., 0.));

        let scatter = material.scatter(&incoming, &hit, &mut rng).unwrap();
        let expected = Vec3::normalized(Vec3::new(1., 1., 0.));
        assert!((scatter.ray.dir - expected).norm() < EPS);
        assert_eq!(scatter.attenuation, Color::new(0.8, 0.6, 0.2));
    }

    #[test]
    fn fuzzy_metal_never_scatters_into_surface() {
        let mut rng = rng();
        let material: Material = Metal::from([1., 1., 1.], 1.).into();
        let hit = hit_at_origin(&material, true);
        // Grazing incidence, so fuzz often pushes below the surface
        let incoming = Ray::new(Vec3::new(-1., 0.05, 0.), Vec3::new(1., -0.05, 0.));

        let mut absorbed = 0;
        for _ in 0..1000 {
            match material.scatter(&incoming, &hit, &mut rng) {
                Some(scatter) => {
                    assert!(scatter.ray.dir.dot(hit.normal) > 0.);
                    assert!(within_unit(scatter.attenuation));
                }
                None => absorbed += 1,
            }
        }
        assert!(absorbed > 0);
    }

    #[test]
    fn fuzz_is_clamped() {
        assert_eq!(Metal::from([1., 1., 1.], 3.).fuzz, 1.);
        assert_eq!(Metal::from([1., 1., 1.], -1.).fuzz, 0.);
    }

    #[test]
    fn dielectric_is_clear() {
        let mut rng = rng();
        let material: Material = Dielectric::new(1.5).into();
        for &front_face in &[true, false] {
            let hit = hit_at_origin(&material, front_face);
            let incoming = Ray::new(Vec3::new(-0.3, 1., 0.), Vec3::new(0.3, -1., 0.));
            for _ in 0..200 {
                let scatter = material.scatter(&incoming, &hit, &mut rng).unwrap();
                assert_eq!(scatter.attenuation, Color::new(1., 1., 1.));
                assert!((scatter.ray.dir.norm() - 1.).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn total_internal_reflection() {
        let mut rng = rng();
        let material: Material = Dielectric::new(1.5).into();
        // Leaving glass at a steep angle: 1.5 * sin(60deg) > 1
        let hit = hit_at_origin(&material, false);
        let dir = Vec3::new(3f64.sqrt() / 2., -0.5, 0.);
        let incoming = Ray::new(Vec3::ORIGIN - dir, dir);

        for _ in 0..100 {
            let scatter = material.scatter(&incoming, &hit, &mut rng).unwrap();
            assert!((scatter.ray.dir - dir.reflect(Vec3::UNIT_Y)).norm() < EPS);
        }
    }

    #[test]
    fn schlick_limits() {
        // Head-on reflectance of glass is about 4%
        let r = Dielectric::schlick(1., 1. / 1.5);
        assert!((r - 0.04).abs() < 1e-12);
        // Grazing incidence reflects everything
        assert!((Dielectric::schlick(0., 1. / 1.5) - 1.).abs() < 1e-12);
    }
}
