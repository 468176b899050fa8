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
width = 400
height = 300
ambient_color = [0.7, 0.8, 0.9]
camera = { look_at = [0, 1, 0], look_from = [6, 3, 8] }
"#;

/// A glass cylinder and a block of fog on a checkered floor
pub struct CheckeredFog;

impl SceneScript for CheckeredFog {
    fn name(&self) -> &'static str {
        "checkered-floor"
    }

    fn scene(&self, _rng: &mut Generator) -> Result<Vec<Shape>> {
        let floor = Shape::rect(
            (-20, 20),
            0,
            (-20, 20),
            Material::checker([0.2, 0.3, 0.1], [0.9, 0.9, 0.9], 2)?,
        )?;

        let pillar = Shape::cylinder([-1.5, 0.0, 0.0], 2, 0.5, Material::dielectric(1.5)?)?;

        let fog = Shape::hitbox(
            [0.0, 0.0, -1.0],
            [2.0, 2.0, 1.0],
            Material::matte([1.0, 1.0, 1.0])?,
        )?
        .rotate_y(30)?
        .constant_medium(0.5, [0.9, 0.9, 0.9])?;

        let lamp = Shape::sphere([0.0, 6.0, 0.0], 1, Material::diffuse_color([4.0, 4.0, 4.0])?)?;

        Ok(vec![floor, pillar, fog, lamp])
    }

    fn config(&self) -> Result<Table> {
        parse_config(CONFIG)
    }
}
