mod cornellbox;
mod cornellsmoke;

use clap::ValueEnum;
use mistrace::camera::CameraSettings;
use mistrace::scene::Scene;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScenesType {
    /// Phong box and blue Phong sphere under a ceiling light.
    Cornell,
    /// Glass sphere; the sphere is sampled as a light as well.
    CornellGlass,
    /// Two boxes filled with smoke.
    CornellSmoke,
}

pub fn get(scene_type: ScenesType) -> (Scene, CameraSettings) {
    match scene_type {
        ScenesType::Cornell => self::cornellbox::scene(),
        ScenesType::CornellGlass => self::cornellbox::glass_scene(),
        ScenesType::CornellSmoke => self::cornellsmoke::scene(),
    }
}
