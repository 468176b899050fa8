use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use rt_scene::{
    config::{merge_overrides, parse_config},
    scene::{
        examples::{CheckeredFog, CornellBox, FoamCubes, SphereCluster, ThreeSpheres},
        RenderEngine, SceneScript,
    },
};
use toml::Table;

use crate::output::{JsonOutput, SummaryOutput};

#[derive(Debug, Default, Clone, Copy, ValueEnum)]
pub enum AvailableScene {
    #[default]
    ThreeSpheres,
    SphereCluster,
    CornellBox,
    FoamCubes,
    CheckeredFloor,
}

impl AvailableScene {
    pub fn script(self) -> &'static dyn SceneScript {
        match self {
            AvailableScene::ThreeSpheres => &ThreeSpheres,
            AvailableScene::SphereCluster => &SphereCluster,
            AvailableScene::CornellBox => &CornellBox,
            AvailableScene::FoamCubes => &FoamCubes,
            AvailableScene::CheckeredFloor => &CheckeredFog,
        }
    }
}

#[derive(Default, Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Hash)]
pub enum AvailableOutput {
    #[default]
    Summary,
    Json,
}

impl AvailableOutput {
    pub fn engine(self, json_path: PathBuf) -> Box<dyn RenderEngine> {
        match self {
            AvailableOutput::Summary => Box::new(SummaryOutput),
            AvailableOutput::Json => Box::new(JsonOutput { path: json_path }),
        }
    }
}

/// Extra configuration given on the command line, merged over the script's own
#[derive(Debug, Default)]
pub struct Overrides(Table);

impl Overrides {
    pub fn load(file: Option<&Path>, sets: &[String]) -> Result<Self> {
        let mut table = match file {
            Some(path) => {
                let source = std::fs::read_to_string(path)
                    .with_context(|| format!("could not read {}", path.display()))?;
                parse_config(&source)
                    .with_context(|| format!("invalid configuration file {}", path.display()))?
            }
            None => Table::new(),
        };

        for set in sets {
            table = merge_overrides(&table, &parse_set(set)?);
        }

        Ok(Self(table))
    }

    pub fn into_table(self) -> Table {
        self.0
    }
}

/// `key=value` where value is written in TOML
fn parse_set(set: &str) -> Result<Table> {
    let Some((key, value)) = set.split_once('=') else {
        return Err(anyhow::anyhow!("expected `key=value`, got `{set}`"));
    };
    parse_config(&format!("{} = {}", key.trim(), value.trim()))
        .with_context(|| format!("invalid override `{set}`"))
}

#[cfg(test)]
mod tests {
    use rt_scene::config::parse_config;

    use super::{parse_set, Overrides};

    #[test]
    fn sets_merge_in_order() {
        let overrides = Overrides::load(
            None,
            &[
                "width=300".to_owned(),
                "camera = { look_from = [1, 2, 3], look_at = [0, 0, 0] }".to_owned(),
                "width=320".to_owned(),
            ],
        )
        .unwrap()
        .into_table();

        assert_eq!(
            overrides,
            parse_config(
                r#"
                width = 320
                camera = { look_from = [1, 2, 3], look_at = [0, 0, 0] }
                "#
            )
            .unwrap()
        );
    }

    #[test]
    fn malformed_set() {
        assert!(parse_set("width").is_err());
        assert!(parse_set("width=").is_err());
        assert!(parse_set("ambient_color=[0.5, 0.7").is_err());
    }
}
