use std::num::{NonZeroU32, NonZeroUsize};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use once_cell::sync::OnceCell;
use rand::Rng;
use structopt::StructOpt;
use strum::VariantNames;
use strum_macros::Display as StrumDisplay;
use strum_macros::{EnumString, EnumVariantNames};

use crate::{Camera, CameraBuilder, Color, CrateRng, Dielectric, HitList, Lambertian, Metal};
use crate::{Sphere, Vec3};

static CONFIG: OnceCell<Config> = OnceCell::new();

#[allow(non_snake_case)]
/// Return a `Config` built from command line args
pub fn GLOBAL() -> &'static Config {
    CONFIG.get_or_init(Config::from_args)
}

#[derive(Clone, Debug, StructOpt)]
#[structopt(about = "Renders a scene of spheres to a plain PPM image")]
pub struct Config {
    #[structopt(short, long, display_order = 0)]
    /// Width of render. Defaults to the scene's width
    pub width: Option<NonZeroUsize>,

    #[structopt(short, long)]
    /// Number of samples per pixel. Defaults to the scene's count
    pub samples: Option<NonZeroU32>,

    #[structopt(short, long)]
    /// Maximum ray bounce depth. Defaults to the scene's depth
    pub max_depth: Option<u32>,

    #[structopt(short = "r", long = "rng")]
    /// Use a specific seed for the rng.
    pub seed: Option<u64>,

    #[structopt(short, long, parse(from_os_str))]
    /// Write the image here instead of to stdout
    pub output: Option<PathBuf>,

    #[structopt(
        default_value = "Cover",
        // Using this instead of possible_values because possible_values doesn't wrap properly
        parse(try_from_str = parse_scene),
    )]
    /// The scene to render
    pub scene: Scene,
}
impl Config {
    /// Applies the command line overrides on top of a scene's camera.
    pub fn apply(&self, camera: &mut CameraBuilder) {
        if let Some(width) = self.width {
            camera.image_width(width.get());
        }
        if let Some(samples) = self.samples {
            camera.samples_per_pixel(samples.get());
        }
        if let Some(depth) = self.max_depth {
            camera.max_depth(depth);
        }
    }
}

fn parse_scene(s: &str) -> Result<Scene> {
    s.parse::<Scene>().map_err(|_| {
        anyhow!(
            "\"{}\" isn't a Scene.\nPossible values: {:#?}",
            s,
            Scene::VARIANTS
        )
    })
}

#[derive(Copy, Clone, Debug, StrumDisplay, EnumString, EnumVariantNames, PartialEq)]
pub enum Scene {
    /// Nothing but sky
    Sky,
    Diffuse,
    Metals,
    /// Includes a hollow glass sphere
    Glass,
    /// `Glass` seen through a wide aperture
    Defocus,
    /// Lots of random spheres
    Cover,
}

impl Scene {
    pub fn create(self, rng: &mut CrateRng) -> (CameraBuilder, HitList) {
        (self.camera(), self.world(rng))
    }

    pub fn camera(self) -> CameraBuilder {
        use Scene::*;

        let mut camera = Camera::builder();
        camera
            .aspect_ratio(16. / 9.)
            .image_width(400)
            .samples_per_pixel(100)
            .max_depth(50);

        match self {
            Sky | Diffuse | Metals | Glass => {}
            Defocus => {
                camera
                    .vfov_degrees(20.)
                    .look_from([-2., 2., 1.])
                    .look_at([0., 0., -1.])
                    .defocus_angle_degrees(10.)
                    .focus_dist(3.4);
            }
            Cover => {
                camera
                    .image_width(1200)
                    .samples_per_pixel(500)
                    .vfov_degrees(20.)
                    .look_from([13., 2., 3.])
                    .look_at([0., 0., 0.])
                    .defocus_angle_degrees(0.6)
                    .focus_dist(10.);
            }
        }

        camera
    }

    pub fn world(self, rng: &mut CrateRng) -> HitList {
        use Scene::*;

        match self {
            Sky => HitList::new(),
            Diffuse => {
                let mut world = HitList::new();
                let grey = Lambertian::new([0.5, 0.5, 0.5]);
                world.push(Sphere::from([0., 0., -1.], 0.5, grey.clone()));
                world.push(Sphere::from([0., -100.5, -1.], 100., grey));

                world
            }
            Metals => {
                let mut world = HitList::new();
                world.push(Sphere::from(
                    [0., -100.5, -1.],
                    100.,
                    Lambertian::new([0.8, 0.8, 0.]),
                ));
                world.push(Sphere::from(
                    [0., 0., -1.],
                    0.5,
                    Lambertian::new([0.7, 0.3, 0.3]),
                ));
                world.push(Sphere::from(
                    [-1., 0., -1.],
                    0.5,
                    Metal::from([0.8, 0.8, 0.8], 0.3),
                ));
                world.push(Sphere::from(
                    [1., 0., -1.],
                    0.5,
                    Metal::from([0.8, 0.6, 0.2], 1.),
                ));

                world
            }
            Glass | Defocus => {
                let mut world = HitList::new();
                world.push(Sphere::from(
                    [0., -100.5, -1.],
                    100.,
                    Lambertian::new([0.8, 0.8, 0.]),
                ));
                world.push(Sphere::from(
                    [0., 0., -1.],
                    0.5,
                    Lambertian::new([0.1, 0.2, 0.5]),
                ));
                // Negative radius makes the inner wall of a hollow bubble
                world.push(Sphere::from([-1., 0., -1.], 0.5, Dielectric::new(1.5)));
                world.push(Sphere::from([-1., 0., -1.], -0.4, Dielectric::new(1.5)));
                world.push(Sphere::from(
                    [1., 0., -1.],
                    0.5,
                    Metal::from([0.8, 0.6, 0.2], 0.),
                ));

                world
            }
            Cover => {
                let mut world = HitList::new();
                world.push(Sphere::from(
                    [0., -1000., 0.],
                    1000.,
                    Lambertian::new([0.5, 0.5, 0.5]),
                ));

                for a in -11..11 {
                    for b in -11..11 {
                        let material = rng.gen::<f64>();
                        let (x, z) = (0.9 * rng.gen::<f64>(), 0.9 * rng.gen::<f64>());
                        let center = Vec3::new(a as f64 + x, 0.2, b as f64 + z);
                        if (center - Vec3::new(4., 0.2, 0.)).norm() <= 0.9 {
                            continue;
                        }
                        if material < 0.8 {
                            // diffuse
                            let albedo = Color::rand(rng) * Color::rand(rng);
                            world.push(Sphere::new(center, 0.2, Lambertian::new(albedo)));
                        } else if material < 0.95 {
                            // metal
                            let albedo = Color::rand_range(rng, 0.5, 1.);
                            let fuzz = rng.gen_range(0., 0.5);
                            world.push(Sphere::new(center, 0.2, Metal::new(albedo, fuzz)));
                        } else {
                            // glass
                            world.push(Sphere::new(center, 0.2, Dielectric::new(1.5)));
                        }
                    }
                }

                world.push(Sphere::from([0., 1., 0.], 1., Dielectric::new(1.5)));
                world.push(Sphere::from(
                    [-4., 1., 0.],
                    1.,
                    Lambertian::new([0.4, 0.2, 0.1]),
                ));
                world.push(Sphere::from(
                    [4., 1., 0.],
                    1.,
                    Metal::from([0.7, 0.6, 0.5], 0.0),
                ));

                world
            }
        }
    }
}

#[cfg(test)]
mod parse_test {
    use super::*;

    #[test]
    fn right_case() {
        assert_eq!("Cover".parse::<Scene>().unwrap(), Scene::Cover);
        assert_eq!("Defocus".parse::<Scene>().unwrap(), Scene::Defocus);
    }

    #[test]
    fn wrong_case() {
        "cover".parse::<Scene>().unwrap_err();
        "cOVER".parse::<Scene>().unwrap_err();
        "glass_ball".parse::<Scene>().unwrap_err();
        "".parse::<Scene>().unwrap_err();
    }

    #[test]
    fn error_lists_scenes() {
        let msg = parse_scene("nope").unwrap_err().to_string();
        for name in Scene::VARIANTS {
            assert!(msg.contains(name), "{} missing from {}", name, msg);
        }
    }

    #[test]
    fn cli_overrides() {
        let config =
            Config::from_iter_safe(&["raytracing", "-w", "64", "-s", "3", "-m", "0", "Glass"])
                .unwrap();
        assert_eq!(config.scene, Scene::Glass);
        assert_eq!(config.seed, None);

        let mut builder = config.scene.camera();
        config.apply(&mut builder);
        let camera = builder.build().unwrap();
        assert_eq!(camera.image_width(), 64);
        assert_eq!(camera.samples_per_pixel(), 3);
        assert_eq!(camera.max_depth(), 0);
    }

    #[test]
    fn rejects_zero_samples() {
        assert!(Config::from_iter_safe(&["raytracing", "-s", "0"]).is_err());
    }
}
