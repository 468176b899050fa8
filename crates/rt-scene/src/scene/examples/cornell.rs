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
height = 400
samples_per_px = 50
camera = { look_at = [300, 300, 0], look_from = [300, 300, -800] }
"#;

/// Closed room lit by a ceiling panel, with three mirror spheres
pub struct CornellBox;

impl SceneScript for CornellBox {
    fn name(&self) -> &'static str {
        "cornell-box"
    }

    fn scene(&self, _rng: &mut Generator) -> Result<Vec<Shape>> {
        let red = [0.9, 0.3, 0.3];
        let green = [0.3, 0.9, 0.3];
        let blue = [0.3, 0.3, 0.9];
        let white = [0.7, 0.7, 0.7];

        // walls facing the inside of the room are flipped
        let mut world = vec![
            // ceiling
            Shape::rect((0, 600), 600, (-1000, 600), Material::matte(white)?)?.flip_normals(),
            // light
            Shape::rect((100, 500), 599, (100, 400), Material::diffuse_color([7.0, 7.0, 7.0])?)?,
            // floor
            Shape::rect((0, 600), 0, (-1000, 600), Material::matte(white)?)?,
            // left
            Shape::rect(600, (0, 600), (-1000, 600), Material::matte(red)?)?.flip_normals(),
            // right
            Shape::rect(0, (0, 600), (-1000, 600), Material::matte(green)?)?,
            // front
            Shape::rect((0, 600), (0, 600), 600, Material::matte(white)?)?.flip_normals(),
            // back
            Shape::rect((0, 600), (0, 600), -1000, Material::matte(white)?)?,
        ];

        for (i, color) in [red, green, blue].into_iter().enumerate() {
            let i = i as f32;
            world.push(Shape::sphere(
                [150.0 + i * 150.0, 150.0 + i * 100.0, 150.0 + i * 100.0],
                80,
                Material::metallic(color)?,
            )?);
        }

        Ok(world)
    }

    fn config(&self) -> Result<Table> {
        parse_config(CONFIG)
    }
}

#[cfg(test)]
mod tests {
    use super::CornellBox;
    use crate::{
        generator::Generator,
        scene::SceneScript,
        shape::{Plane, Shape},
    };

    #[test]
    fn walls_are_inferred() {
        let world = CornellBox.scene(&mut Generator::from_seed(0)).unwrap();
        assert_eq!(world.len(), 10);

        let planes: Vec<(Plane, bool)> = world
            .iter()
            .filter_map(|shape| match shape {
                Shape::Rect(rect) => Some((rect.plane(), rect.normal_flipped())),
                _ => None,
            })
            .collect();

        assert_eq!(
            planes,
            vec![
                (Plane::XZ, true),
                (Plane::XZ, false),
                (Plane::XZ, false),
                (Plane::YZ, true),
                (Plane::YZ, false),
                (Plane::XY, true),
                (Plane::XY, false),
            ]
        );

        let Shape::Rect(light) = &world[1] else {
            panic!("expected the light panel")
        };
        assert!(light.material().is_emissive());
        assert_eq!(light.offset(), 599.0);
    }
}
