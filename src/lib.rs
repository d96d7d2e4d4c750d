//! Monte Carlo path tracing with interchangeable importance sampling
//! strategies: material sampling, light/material mixtures, next event
//! estimation and multiple importance sampling.

pub mod affine;
pub mod aliases;
pub mod background;
pub mod camera;
pub mod film;
pub mod hit_record;
pub mod hitable;
pub mod integrator;
pub mod material;
pub mod onb;
pub mod pdf;
pub mod ray;
pub mod render;
pub mod scatter_record;
pub mod scene;
pub mod texture;

pub use crate::camera::{Camera, CameraSettings};
pub use crate::film::Film;
pub use crate::integrator::{radiance, RenderMode};
pub use crate::render::{render, RenderSettings};
pub use crate::scene::Scene;
