use toml::Table;

use crate::{
    config::parse_config,
    generator::{Constructor, Generator},
    material::Material,
    scene::SceneScript,
    shape::Shape,
    Result,
};

const CONFIG: &str = r#"
width = 600
height = 450
ambient_color = [0.5, 0.7, 0.9]
camera = { look_at = [0, 0, 0], look_from = [10, 2, 4] }
"#;

const GRID: std::ops::Range<i32> = -11..11;

/// A grid of small randomized spheres around three big ones
pub struct SphereCluster;

impl SceneScript for SphereCluster {
    fn name(&self) -> &'static str {
        "sphere-cluster"
    }

    fn scene(&self, rng: &mut Generator) -> Result<Vec<Shape>> {
        let matte: Constructor<Material> = &|rng| Material::matte(rng.random_color());
        let metallic: Constructor<Material> =
            &|rng| Material::metallic_fuzzed(rng.random_color(), 0.25 * rng.rand());
        let glass: Constructor<Material> = &|rng| Material::dielectric(1.0 + rng.rand());
        let materials = [matte, metallic, glass];
        let weights = [1.0, 1.0, 1.0];

        let small = GRID
            .flat_map(|a| GRID.map(move |b| (a as f32, b as f32)))
            .map(|(a, b)| {
                let center = [a + 0.9 * rng.rand(), 0.2, b + 0.9 * rng.rand()];
                let material = rng.choose_constructor(&materials, &weights)?;
                Shape::sphere(center, 0.2, material)
            });

        let big = [
            Shape::sphere([0.0, 1.0, 0.0], 1, Material::dielectric(1.5)?),
            Shape::sphere([-4.0, 1.0, 0.0], 1, Material::matte([0.4, 0.2, 0.1])?),
            Shape::sphere([4.0, 1.0, 0.0], 1, Material::metallic([0.7, 0.6, 0.5])?),
        ];

        let spheres = Shape::try_hierarchy_node(small.chain(big))?;
        let ground = Shape::sphere([0.0, -200.0, 0.0], 200, Material::metallic([0.5, 0.5, 0.5])?)?;

        Ok(vec![spheres, Shape::hierarchy_node([ground])])
    }

    fn config(&self) -> Result<Table> {
        parse_config(CONFIG)
    }

    fn default_seed(&self) -> u64 {
        0xDEADBEEF
    }
}
