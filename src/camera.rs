use std::time::Instant;

use anyhow::{ensure, Context, Result};
use log::{debug, info};
use rand::Rng;

use crate::{Color, CrateRng, Hittable, Interval, Point3, Ray, Screen, Vec3};

/// Color of the sky straight up. It fades to white at the horizon.
const SKY_BLUE: Color = Color::new(0.5, 0.7, 1.0);
/// Lower bound for hits of scattered rays. Avoids shadow acne.
const T_MIN: f64 = 0.001;

#[derive(Clone, Debug)]
pub struct Camera {
    image_width: usize,
    image_height: usize,
    samples_per_pixel: u32,
    max_depth: u32,

    center: Point3,
    /// Location of the center of pixel `(0, 0)`, the top-left one.
    pixel00: Point3,
    /// Offset to the pixel on the right.
    pixel_delta_u: Vec3,
    /// Offset to the pixel below.
    pixel_delta_v: Vec3,

    /// Width part of the orthonormal basis.
    u: Vec3,
    /// Height part of the orthonormal basis.
    v: Vec3,
    /// Depth part of the orthonormal basis. Points away from the scene.
    w: Vec3,

    /// Horizontal and vertical radius of the lens.
    /// `None` when depth of field is disabled.
    defocus_disk: Option<(Vec3, Vec3)>,
}
impl Camera {
    pub fn builder() -> CameraBuilder {
        CameraBuilder::default()
    }

    /// Always at least 1.
    pub fn image_width(&self) -> usize {
        self.image_width
    }

    /// Always at least 1.
    pub fn image_height(&self) -> usize {
        self.image_height
    }

    /// Always at least 1.
    pub fn samples_per_pixel(&self) -> u32 {
        self.samples_per_pixel
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn u(&self) -> Vec3 {
        self.u
    }

    pub fn v(&self) -> Vec3 {
        self.v
    }

    pub fn w(&self) -> Vec3 {
        self.w
    }

    /// A randomly sampled ray through pixel `(i, j)`, counted from the top left.
    pub fn get_ray(&self, i: usize, j: usize, rng: &mut CrateRng) -> Ray {
        let offset_u = rng.gen::<f64>() - 0.5;
        let offset_v = rng.gen::<f64>() - 0.5;
        let pixel_sample = self.pixel00
            + (i as f64 + offset_u) * self.pixel_delta_u
            + (j as f64 + offset_v) * self.pixel_delta_v;

        let origin = match self.defocus_disk {
            Some((disk_u, disk_v)) => {
                let p = Vec3::rand_in_unit_disk(rng);
                self.center + p.x * disk_u + p.y * disk_v
            }
            None => self.center,
        };

        Ray::new(origin, pixel_sample - origin)
    }

    /// Renders `world`, logging progress as it goes.
    pub fn render<H: Hittable + ?Sized>(&self, world: &H, rng: &mut CrateRng) -> Screen {
        info!(
            "Rendering {}x{} at {} samples per pixel, max depth {}",
            self.image_width, self.image_height, self.samples_per_pixel, self.max_depth
        );
        let start = Instant::now();
        let screen = self.render_with_progress(world, rng, |remaining| {
            debug!("Scanlines remaining: {}", remaining);
        });
        info!("Done in {:.2?}", start.elapsed());
        screen
    }

    /// Renders `world` row by row, top to bottom.
    /// `progress` is called after each row with the number of rows left.
    pub fn render_with_progress<H, F>(
        &self,
        world: &H,
        rng: &mut CrateRng,
        mut progress: F,
    ) -> Screen
    where
        H: Hittable + ?Sized,
        F: FnMut(usize),
    {
        let mut screen = Screen::new(self.image_width, self.image_height);
        let samples = self.samples_per_pixel as f64;

        for (j, row) in screen.rows_mut().enumerate() {
            for (i, pix) in row.iter_mut().enumerate() {
                let mut color = Color::BLACK;
                for _ in 0..self.samples_per_pixel {
                    let ray = self.get_ray(i, j, rng);
                    color += ray_color(&ray, world, self.max_depth, rng);
                }
                *pix = color / samples;
            }
            progress(self.image_height - j - 1);
        }

        screen
    }
}

/// Radiance carried back along `ray`, following at most `depth` bounces.
pub fn ray_color<H: Hittable + ?Sized>(
    ray: &Ray,
    world: &H,
    depth: u32,
    rng: &mut CrateRng,
) -> Color {
    // Bounce limit reached, no more light is gathered
    if depth == 0 {
        return Color::BLACK;
    }

    if let Some(hit) = world.hit(ray, Interval::new(T_MIN, f64::INFINITY)) {
        return match hit.material.scatter(ray, &hit, rng) {
            Some(scatter) => {
                scatter.attenuation * ray_color(&scatter.ray, world, depth - 1, rng)
            }
            None => Color::BLACK,
        };
    }

    sky_color(ray)
}

/// Vertical gradient from white to blue.
pub fn sky_color(ray: &Ray) -> Color {
    let unit_dir = Vec3::normalized(ray.dir);
    let t = 0.5 * (unit_dir.y + 1.);
    Color::WHITE.lerp(SKY_BLUE, t)
}

#[derive(Clone, Debug)]
pub struct CameraBuilder {
    /// Ratio of image width over height
    aspect_ratio: f64,
    image_width: usize,
    samples_per_pixel: u32,
    /// Maximum number of ray bounces into the scene
    max_depth: u32,
    vfov_degrees: f64,
    look_from: Point3,
    look_at: Point3,
    /// Camera-relative "up" direction
    view_up: Vec3,
    /// Variation angle of rays through each pixel. `0` disables depth of field.
    defocus_angle_degrees: f64,
    /// Distance from `look_from` to the plane of perfect focus
    focus_dist: f64,
}
impl CameraBuilder {
    /// Derives the viewport and camera frame. Can be called again after changing settings.
    pub fn build(&self) -> Result<Camera> {
        self.validate().camera_context(self)?;

        let image_width = self.image_width.max(1);
        let image_height = ((image_width as f64 / self.aspect_ratio) as usize).max(1);

        let theta = self.vfov_degrees.to_radians();
        let viewport_height = 2. * (theta / 2.).tan() * self.focus_dist;
        let viewport_width = viewport_height * (image_width as f64 / image_height as f64);

        // Form the orthonormal basis, and deal with bad camera configurations.

        // Error if camera's look_from and look_at are the same.
        let w = Vec3::checked_normalized(self.look_from - self.look_at)
            .with_context(|| {
                format!(
                    "Camera's look_from and look_at vectors are the same.\nlook_from: {:?}",
                    self.look_from,
                )
            })
            .camera_context(self)?;

        // Error if the view_up vector has length 0.
        let view_up = Vec3::checked_normalized(self.view_up)
            .with_context(|| format!("Camera's view_up vector has length 0: {:?}", self.view_up))
            .camera_context(self)?;

        // Error if look_at and view_up are parallel.
        let u = Vec3::checked_normalized(view_up.cross(w))
            .with_context(|| {
                format!(
                    "Camera's view direction and view_up vectors are parallel.\n{:?} || {:?}",
                    -w, view_up,
                )
            })
            .camera_context(self)?;

        let v = w.cross(u);
        let center = self.look_from;

        // Across the viewport's horizontal edge, and down its vertical edge
        let viewport_u = viewport_width * u;
        let viewport_v = viewport_height * -v;

        let pixel_delta_u = viewport_u / image_width as f64;
        let pixel_delta_v = viewport_v / image_height as f64;

        let viewport_upper_left = center - self.focus_dist * w - viewport_u / 2. - viewport_v / 2.;
        let pixel00 = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        let defocus_disk = if self.defocus_angle_degrees > 0. {
            let radius = self.focus_dist * (self.defocus_angle_degrees.to_radians() / 2.).tan();
            Some((radius * u, radius * v))
        } else {
            None
        };

        Ok(Camera {
            image_width,
            image_height,
            samples_per_pixel: self.samples_per_pixel,
            max_depth: self.max_depth,
            center,
            pixel00,
            pixel_delta_u,
            pixel_delta_v,
            u,
            v,
            w,
            defocus_disk,
        })
    }
    fn validate(&self) -> Result<()> {
        ensure!(
            self.samples_per_pixel > 0,
            "Camera needs at least 1 sample per pixel"
        );
        ensure!(
            self.aspect_ratio.is_finite() && self.aspect_ratio > 0.,
            "Camera's aspect ratio must be positive: {}",
            self.aspect_ratio
        );
        ensure!(
            self.focus_dist.is_finite() && self.focus_dist > 0.,
            "Camera's focus distance must be positive: {}",
            self.focus_dist
        );
        ensure!(
            0. < self.vfov_degrees && self.vfov_degrees < 180.,
            "Camera's vertical field of view must be in (0, 180) degrees: {}",
            self.vfov_degrees
        );
        Ok(())
    }

    // ===== Builder Methods =====
    pub fn aspect_ratio(&mut self, aspect_ratio: f64) -> &mut Self {
        self.aspect_ratio = aspect_ratio;
        self
    }
    pub fn image_width(&mut self, width: usize) -> &mut Self {
        self.image_width = width;
        self
    }
    pub fn samples_per_pixel(&mut self, samples: u32) -> &mut Self {
        self.samples_per_pixel = samples;
        self
    }
    pub fn max_depth(&mut self, depth: u32) -> &mut Self {
        self.max_depth = depth;
        self
    }
    pub fn vfov_degrees(&mut self, vfov: f64) -> &mut Self {
        self.vfov_degrees = vfov;
        self
    }
    pub fn look_from<T: Into<Point3>>(&mut self, look_from: T) -> &mut Self {
        self.look_from = look_from.into();
        self
    }
    pub fn look_at<T: Into<Point3>>(&mut self, look_at: T) -> &mut Self {
        self.look_at = look_at.into();
        self
    }
    pub fn view_up<T: Into<Vec3>>(&mut self, view_up: T) -> &mut Self {
        self.view_up = view_up.into();
        self
    }
    /// Used for depth of field. `0` disables it.
    pub fn defocus_angle_degrees(&mut self, angle: f64) -> &mut Self {
        self.defocus_angle_degrees = angle;
        self
    }
    pub fn focus_dist(&mut self, dist: f64) -> &mut Self {
        self.focus_dist = dist;
        self
    }
}
impl Default for CameraBuilder {
    fn default() -> Self {
        Self {
            aspect_ratio: 1.,
            image_width: 100,
            samples_per_pixel: 10,
            max_depth: 10,
            vfov_degrees: 90.,
            look_from: Vec3::ORIGIN,
            look_at: Vec3::new(0., 0., -1.),
            view_up: Vec3::UNIT_Y,
            defocus_angle_degrees: 0.,
            focus_dist: 10.,
        }
    }
}

trait ResultExt<T> {
    fn camera_context(self, builder: &CameraBuilder) -> Result<T>;
}
impl<T> ResultExt<T> for Result<T> {
    /// Attach the CameraBuilder to the Result as context.
    fn camera_context(self, builder: &CameraBuilder) -> Result<T> {
        self.with_context(|| format!("Invalid Camera configuration.\n{:#?}", builder))
    }
}
