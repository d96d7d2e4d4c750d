use crate::affine::Affine;
use crate::aliases::{Vec2, Vec3};
use crate::material::Material;
use crate::ray::Ray;

#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    pub t: f64,
    pub point: Vec3,
    pub tex_coord: Vec2,
    /// Unit normal, always pointing against the incoming ray.
    pub normal: Vec3,
    /// Whether the ray hit the side the geometric normal points out of.
    pub front_face: bool,
    pub material: &'a dyn Material,
}

impl<'a> HitRecord<'a> {
    /// * `outward_normal` - must be normalized.
    pub fn new(
        ray: &Ray,
        t: f64,
        point: &Vec3,
        tex_coord: &Vec2,
        outward_normal: &Vec3,
        material: &'a dyn Material,
    ) -> Self {
        let front_face = ray.direction.dot(outward_normal) < 0.0;
        HitRecord {
            t,
            point: *point,
            tex_coord: *tex_coord,
            normal: if front_face {
                *outward_normal
            } else {
                -outward_normal
            },
            front_face,
            material,
        }
    }
    pub fn get_transformed(&self, tr: &Affine) -> HitRecord<'a> {
        HitRecord {
            point: tr.act_point(&self.point),
            normal: tr.act_2_vec(&self.normal).normalize(),
            ..*self
        }
    }
}
