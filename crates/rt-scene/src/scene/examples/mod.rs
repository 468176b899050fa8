//! Scene scripts bundled with the crate

mod checkered;
mod cornell;
mod foam_cubes;
mod sphere_cluster;
mod spheres;

pub use checkered::CheckeredFog;
pub use cornell::CornellBox;
pub use foam_cubes::FoamCubes;
pub use sphere_cluster::SphereCluster;
pub use spheres::ThreeSpheres;
