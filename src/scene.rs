use crate::background::Background;
use crate::hitable::hitable_list::HitableList;
use std::sync::Arc;

pub struct Scene {
    pub hitables: HitableList, // rendered hitables
    pub lights: HitableList,   // hitables sampled toward for direct lighting
    pub bg: Arc<dyn Background>,
}
