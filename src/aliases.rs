use nalgebra as na;

pub type Vec3 = na::Vector3<f64>;
pub type Vec2 = na::Vector2<f64>;
pub type Mat3 = na::Matrix3<f64>;
pub type RandGen = rand_pcg::Pcg64Mcg;
