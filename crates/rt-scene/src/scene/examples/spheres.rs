use toml::Table;

use crate::{
    config::parse_config,
    generator::Generator,
    material::Material,
    scene::SceneScript,
    shape::Shape,
    Result,
};

const CONFIG: &str = r#"
samples_per_px = 100
ambient_color = [0.5, 0.7, 0.9]
camera = { look_at = [0, 0, 0], look_from = [150, 100, 200] }
"#;

/// Red, green and blue spheres resting on a mirror ground
pub struct ThreeSpheres;

impl SceneScript for ThreeSpheres {
    fn name(&self) -> &'static str {
        "three-spheres"
    }

    fn scene(&self, _rng: &mut Generator) -> Result<Vec<Shape>> {
        let red = [1.0, 0.0, 0.0];
        let green = [0.0, 1.0, 0.0];
        let blue = [0.0, 0.0, 1.0];
        let white = [0.7, 0.7, 0.7];

        let mut world = [red, green, blue]
            .into_iter()
            .enumerate()
            .map(|(i, color)| {
                Shape::sphere(
                    [-50.0 + i as f32 * 50.0, 0.0, 0.0],
                    20,
                    Material::matte(color)?,
                )
            })
            .collect::<Result<Vec<_>>>()?;

        world.push(Shape::sphere(
            [0.0, -1000.0, 0.0],
            1000,
            Material::metallic(white)?,
        )?);

        Ok(world)
    }

    fn config(&self) -> Result<Table> {
        parse_config(CONFIG)
    }
}
