/// Minimum-image convention for a cubic periodic box
pub mod minimum_image;

pub use minimum_image::{
    aggregate_separation, closest_mirror, closest_separation, for_each_separation,
    minimum_image_offset, separations,
};
