use anyhow::Result;
use rt_scene::{config::SceneConfig, scene::RenderEngine, shape::Shape};

/// Logs what would be rendered without rendering it
pub struct SummaryOutput;

impl RenderEngine for SummaryOutput {
    fn submit(&mut self, scene: SceneConfig) -> Result<()> {
        let descriptors: usize = scene.world.iter().map(Shape::descriptor_count).sum();
        log::info!(
            "{}x{} px, {} spp, {} rays per sample, ambient {:?}",
            scene.width,
            scene.height,
            scene.samples_per_px,
            scene.rays_per_sample,
            scene.ambient_color.to_array()
        );
        log::info!(
            "camera from {} to {}",
            scene.camera.look_from.vec(),
            scene.camera.look_at.vec()
        );
        log::info!(
            "{} top level shapes, {} descriptors",
            scene.world.len(),
            descriptors
        );

        match scene.world.iter().filter_map(Shape::bounds).reduce(|a, b| a.union(&b)) {
            Some(bounds) => log::info!(
                "world bounds {} .. {}",
                bounds.origin.vec(),
                bounds.end().vec()
            ),
            None => log::warn!("world is empty"),
        }

        Ok(())
    }
}
