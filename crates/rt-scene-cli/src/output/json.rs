use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::{Context, Result};
use rt_scene::{config::SceneConfig, scene::RenderEngine};

/// Hands the scene over as a json document
pub struct JsonOutput {
    pub path: PathBuf,
}

impl RenderEngine for JsonOutput {
    fn submit(&mut self, scene: SceneConfig) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("could not create {}", dir.display()))?;
        }

        let file = File::create(&self.path)
            .with_context(|| format!("could not create {}", self.path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &scene)
            .context("could not serialize the scene")?;

        log::info!("scene written to {}", self.path.display());
        Ok(())
    }
}
