use crate::aliases::{RandGen, Vec2, Vec3};
use crate::ray::Ray;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct CameraSettings {
    pub image_width: usize,
    pub aspect_ratio: f64, // width over height
    pub vfov: f64,         // vertical field of view in degrees
    pub look_from: Vec3,
    pub look_at: Vec3,
    pub view_up: Vec3,
    pub defocus_angle: f64, // variation angle of rays through each pixel, in degrees
    pub focus_dist: f64,    // distance from look_from to the plane of perfect focus
}

impl Default for CameraSettings {
    fn default() -> Self {
        CameraSettings {
            image_width: 600,
            aspect_ratio: 1.0,
            vfov: 40.0,
            look_from: Vec3::new(278.0, 278.0, -800.0),
            look_at: Vec3::new(278.0, 278.0, 0.0),
            view_up: Vec3::new(0.0, 1.0, 0.0),
            defocus_angle: 0.0,
            focus_dist: 10.0,
        }
    }
}

/// A thin lens camera. Pixel (0, 0) is the upper left one.
pub struct Camera {
    image_width: usize,
    image_height: usize,
    center: Vec3,
    pixel00_loc: Vec3,
    pixel_delta_u: Vec3, // offset to the pixel to the right
    pixel_delta_v: Vec3, // offset to the pixel below
    defocus_angle: f64,
    defocus_disk_u: Vec3,
    defocus_disk_v: Vec3,
}

impl Camera {
    pub fn new(settings: &CameraSettings) -> Self {
        let image_width = settings.image_width.max(1);
        let image_height = ((image_width as f64 / settings.aspect_ratio) as usize).max(1);
        let center = settings.look_from;

        let h = (settings.vfov.to_radians() * 0.5).tan();
        let viewport_height = 2.0 * h * settings.focus_dist;
        let viewport_width = viewport_height * (image_width as f64 / image_height as f64);

        let w = (settings.look_from - settings.look_at).normalize();
        let u = settings.view_up.cross(&w).normalize();
        let v = w.cross(&u);

        let viewport_u = viewport_width * u;
        let viewport_v = -viewport_height * v;
        let pixel_delta_u = viewport_u / image_width as f64;
        let pixel_delta_v = viewport_v / image_height as f64;
        let viewport_upper_left =
            center - settings.focus_dist * w - 0.5 * viewport_u - 0.5 * viewport_v;
        let pixel00_loc = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        let defocus_radius = settings.focus_dist * (settings.defocus_angle.to_radians() * 0.5).tan();
        Camera {
            image_width,
            image_height,
            center,
            pixel00_loc,
            pixel_delta_u,
            pixel_delta_v,
            defocus_angle: settings.defocus_angle,
            defocus_disk_u: defocus_radius * u,
            defocus_disk_v: defocus_radius * v,
        }
    }
    pub fn image_width(&self) -> usize {
        self.image_width
    }
    pub fn image_height(&self) -> usize {
        self.image_height
    }
    /// A ray through a random point of the sub-pixel (s_i, s_j) of pixel (i, j),
    /// the pixel being split into sqrt_spp x sqrt_spp strata.
    pub fn get_ray(
        &self,
        i: usize,
        j: usize,
        s_i: usize,
        s_j: usize,
        sqrt_spp: usize,
        rng: &mut RandGen,
    ) -> Ray {
        let offset = sample_square_stratified(s_i, s_j, sqrt_spp, rng);
        let pixel_sample = self.pixel00_loc
            + (i as f64 + offset.x) * self.pixel_delta_u
            + (j as f64 + offset.y) * self.pixel_delta_v;
        let origin = if self.defocus_angle <= 0.0 {
            self.center
        } else {
            let p = random_in_unit_disc(rng);
            self.center + p.x * self.defocus_disk_u + p.y * self.defocus_disk_v
        };
        let time = rng.gen::<f64>();
        Ray::new(&origin, &(pixel_sample - origin), time)
    }
}

/// Uniform point in the unit disc, for jittering the lens position.
fn random_in_unit_disc(rng: &mut RandGen) -> Vec2 {
    loop {
        let p = Vec2::new(
            2.0 * rng.gen::<f64>() - 1.0,
            2.0 * rng.gen::<f64>() - 1.0,
        );
        if p.norm_squared() < 1.0 {
            return p;
        }
    }
}

/// A random point in the sub-square (s_i, s_j) of the unit pixel [-0.5, 0.5]^2.
pub fn sample_square_stratified(s_i: usize, s_j: usize, sqrt_spp: usize, rng: &mut RandGen) -> Vec2 {
    let recip = 1.0 / sqrt_spp as f64;
    Vec2::new(
        (s_i as f64 + rng.gen::<f64>()) * recip - 0.5,
        (s_j as f64 + rng.gen::<f64>()) * recip - 0.5,
    )
}
