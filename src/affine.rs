use crate::aliases::{Mat3, Vec3};

/// 3d invertible affine transformation
///
/// Only rigid motions can be built, so densities measured in solid angle
/// are preserved by every `Affine`.
#[derive(Clone, Copy, Debug)]
pub struct Affine {
    a: Mat3,
    b: Vec3,
    a_inv: Mat3, // the inverse matrix of a
    a_det: f64,  // the determinant of a
}

impl Affine {
    pub fn identity() -> Self {
        Affine {
            a: Mat3::identity(),
            b: Vec3::zeros(),
            a_inv: Mat3::identity(),
            a_det: 1.0,
        }
    }
    /// Creates inverse transformation of self
    pub fn inverse(&self) -> Affine {
        Affine {
            a: self.a_inv,
            b: -self.a_inv * self.b,
            a_inv: self.a,
            a_det: 1.0 / self.a_det,
        }
    }
    /// `self` applied after `first`.
    pub fn after(&self, first: &Affine) -> Affine {
        Affine {
            a: self.a * first.a,
            b: self.a * first.b + self.b,
            a_inv: first.a_inv * self.a_inv,
            a_det: self.a_det * first.a_det,
        }
    }
    /// Act on a point.
    pub fn act_point(&self, pt: &Vec3) -> Vec3 {
        self.a * pt + self.b
    }
    /// Act on a 1-vector (e.g., difference of two points)
    pub fn act_vec(&self, v: &Vec3) -> Vec3 {
        self.a * v
    }
    /// Act on a 2-vector (e.g., the cross product of two 1-vectors, such as normal to a surface)
    pub fn act_2_vec(&self, tv: &Vec3) -> Vec3 {
        self.a_det * self.a_inv.transpose() * tv
    }
    /// Creates rotation transformation around an axis through `origin`.
    /// `axisangle` is the axis scaled by the angle in radians.
    pub fn rotation(axisangle: &Vec3, origin: &Vec3) -> Self {
        let rot = *nalgebra::Rotation3::new(*axisangle).matrix();
        Affine {
            a: rot,
            b: -rot * origin + origin,
            a_inv: rot.transpose(),
            a_det: 1.0,
        }
    }
    /// Rotation around the y-axis through the world origin, in degrees.
    pub fn rotate_y(degrees: f64) -> Self {
        Affine::rotation(&Vec3::new(0.0, degrees.to_radians(), 0.0), &Vec3::zeros())
    }
    /// Creates translation transformation.
    pub fn translate(diff: &Vec3) -> Self {
        Affine {
            b: *diff,
            ..Affine::identity()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Affine;
    use crate::aliases::Vec3;

    #[test]
    fn composed_transform_roundtrips_points() {
        let tr = Affine::translate(&Vec3::new(265.0, 0.0, 295.0)).after(&Affine::rotate_y(15.0));
        let p = Vec3::new(165.0, 330.0, 165.0);
        let q = tr.inverse().act_point(&tr.act_point(&p));
        assert!((p - q).norm() < 1e-9);
    }

    #[test]
    fn rotate_y_quarter_turn() {
        let tr = Affine::rotate_y(90.0);
        let v = tr.act_vec(&Vec3::new(1.0, 0.0, 0.0));
        assert!((v - Vec3::new(0.0, 0.0, -1.0)).norm() < 1e-9);
        let n = tr.act_2_vec(&Vec3::new(1.0, 0.0, 0.0));
        assert!((n - v).norm() < 1e-9);
    }
}
