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
samples_per_px = 25
ambient_color = [0.7, 0.8, 0.9]
camera = { look_at = [300, 600, 0], look_from = [400, 600, -1000] }
"#;

const FERRIS_SWEAT: &str = "https://glo.bi/static/ferris_sweat.png";
const FERRIS_UNSAFE: &str = "https://glo.bi/static/ferris_unsafe.png";
const GOPHER_PEEK: &str = "https://glo.bi/static/gopher_peek.png";
const GOPHER: &str = "https://glo.bi/static/gopher.png";

const TILE_SIZE: i32 = 100;
const TILES_X: i32 = 15;
const TILES_Z: i32 = 40;
const FERRIS_COUNT: usize = 500;
const GOPHER_COUNT: usize = 150;

/// Textured sphere foams floating over a tiled ground, in front of a
/// tilted gopher cube
pub struct FoamCubes;

impl SceneScript for FoamCubes {
    fn name(&self) -> &'static str {
        "foam-cubes"
    }

    fn scene(&self, rng: &mut Generator) -> Result<Vec<Shape>> {
        let ferris_sweat = Material::image(FERRIS_SWEAT)?;
        let gopher = Material::image(GOPHER)?;

        let foam_ferris = Shape::try_hierarchy_node((0..FERRIS_COUNT).map(|_| {
            Shape::sphere([0.0, 0.0, 0.0], 50, ferris_sweat.clone())?
                .rotate_y(rng.rand() * 180.0)?
                .translate(rng.random_point_in_cube(800.0))
        }))?;

        let foam_gopher = Shape::try_hierarchy_node((0..GOPHER_COUNT).map(|_| {
            Shape::sphere([0.0, 0.0, 0.0], 150, gopher.clone())?
                .rotate_y(rng.rand() * 100.0)?
                .rotate_x(-50)?
                .translate(rng.random_point_in_cube(1200.0))
        }))?;

        let ground = Shape::try_hierarchy_node(ground(rng)?)?;

        let gopher_cube = Shape::hitbox(
            [0.0, 0.0, 0.0],
            [4000.0, 5000.0, 5000.0],
            Material::image(GOPHER_PEEK)?,
        )?
        .rotate_y(-50)?
        .rotate_x(50)?
        .translate([500.0, 2000.0, 5000.0])?;

        Ok(vec![
            ground,
            foam_ferris.translate([200.0, 200.0, 2000.0])?,
            foam_gopher.translate([-1400.0, 800.0, 3000.0])?,
            gopher_cube,
        ])
    }

    fn config(&self) -> Result<Table> {
        parse_config(CONFIG)
    }

    fn default_seed(&self) -> u64 {
        0xDEADBEEF
    }
}

/// Lazy grid of flat tiles, mostly light green mirrors
fn ground(rng: &mut Generator) -> Result<impl Iterator<Item = Result<Shape>> + '_> {
    let light_green = Material::metallic([0.48, 0.83, 0.53])?;
    let ferris_unsafe = Material::image(FERRIS_UNSAFE)?;

    let tiles = (0..TILES_X).flat_map(|dx| (0..TILES_Z).map(move |dz| (dx, dz)));
    Ok(tiles.map(move |(dx, dz)| {
        let x0 = -500 + dx * TILE_SIZE;
        let z0 = -2000 + dz * TILE_SIZE;
        let material = if rng.rand() < 0.9 {
            light_green.clone()
        } else {
            ferris_unsafe.clone()
        };

        Shape::hitbox(
            [x0 as f32, 0.0, z0 as f32],
            [(x0 + TILE_SIZE) as f32, 10.0, (z0 + TILE_SIZE) as f32],
            material,
        )
    }))
}
