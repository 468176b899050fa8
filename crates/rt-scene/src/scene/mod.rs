pub mod examples;

use toml::Table;

use crate::{
    config::{merge_overrides, resolve, SceneConfig},
    generator::Generator,
    shape::Shape,
    Result,
};

/// A scene description: a world plus its sparse configuration.
///
/// Scripts with a module level mapping implement [SceneScript::config] as
/// `parse_config(CONFIG)`.
pub trait SceneScript {
    fn name(&self) -> &'static str;

    /// Builds the world. All randomness must come from `rng`.
    fn scene(&self, rng: &mut Generator) -> Result<Vec<Shape>>;

    fn config(&self) -> Result<Table> {
        Ok(Table::new())
    }

    /// Seed used when the host does not provide one
    fn default_seed(&self) -> u64 {
        0
    }
}

/// The rendering side of the submit boundary.
///
/// The engine takes ownership of the resolved scene, this crate has no
/// responsibility for it afterwards.
pub trait RenderEngine {
    fn submit(&mut self, scene: SceneConfig) -> anyhow::Result<()>;
}

/// Compiles `script` with a generator seeded from `seed`.
///
/// `extra` overrides are merged over the script's own mapping, key by key.
/// The generator only lives for this compilation.
pub fn compile(script: &dyn SceneScript, seed: u64, extra: &Table) -> Result<SceneConfig> {
    log::debug!("compiling scene `{}` with seed {seed:#x}", script.name());

    let mut rng = Generator::from_seed(seed);
    let world = script.scene(&mut rng)?;
    drop(rng);

    let overrides = merge_overrides(&script.config()?, extra);
    resolve(world, &overrides)
}

/// Compiles then hands the result to `engine`
pub fn compile_and_submit(
    script: &dyn SceneScript,
    seed: u64,
    extra: &Table,
    engine: &mut dyn RenderEngine,
) -> anyhow::Result<()> {
    let scene = compile(script, seed, extra)?;
    engine.submit(scene)
}

#[cfg(test)]
mod tests {
    use toml::Table;

    use super::{compile, compile_and_submit, examples, RenderEngine, SceneScript};
    use crate::{
        config::{parse_config, resolve, SceneConfig},
        generator::Generator,
        material::Material,
        math::point::Point,
        shape::Shape,
        CompileError, Result,
    };

    struct Recorder(Vec<SceneConfig>);

    impl RenderEngine for Recorder {
        fn submit(&mut self, scene: SceneConfig) -> anyhow::Result<()> {
            self.0.push(scene);
            Ok(())
        }
    }

    #[test]
    fn three_spheres_end_to_end() {
        let world = examples::ThreeSpheres
            .scene(&mut Generator::from_seed(0))
            .unwrap();
        let scene = resolve(
            world,
            &parse_config("camera = { look_from = [150, 100, 200], look_at = [0, 0, 0] }").unwrap(),
        )
        .unwrap();

        let red = Material::matte([1.0, 0.0, 0.0]).unwrap();
        let green = Material::matte([0.0, 1.0, 0.0]).unwrap();
        let blue = Material::matte([0.0, 0.0, 1.0]).unwrap();
        let ground = Material::metallic([0.7, 0.7, 0.7]).unwrap();

        assert_eq!(
            scene.world,
            vec![
                Shape::sphere([-50.0, 0.0, 0.0], 20, red).unwrap(),
                Shape::sphere([0.0, 0.0, 0.0], 20, green).unwrap(),
                Shape::sphere([50.0, 0.0, 0.0], 20, blue).unwrap(),
                Shape::sphere([0.0, -1000.0, 0.0], 1000, ground).unwrap(),
            ]
        );
        assert_eq!((scene.width, scene.height), (500, 500));
        assert_eq!(scene.samples_per_px, 50);
        assert_eq!(scene.camera.look_from, Point::new(150.0, 100.0, 200.0));
        assert_eq!(scene.camera.look_at, Point::ORIGIN);

        // the script's own mapping still applies when compiled
        let compiled = compile(&examples::ThreeSpheres, 0, &Table::new()).unwrap();
        assert_eq!(compiled.world, scene.world);
        assert_eq!(compiled.camera, scene.camera);
        assert_eq!(compiled.samples_per_px, 100);
    }

    #[test]
    fn same_seed_same_scene() {
        let script = examples::SphereCluster;
        let a = compile(&script, 0xDEADBEEF, &Table::new()).unwrap();
        let b = compile(&script, 0xDEADBEEF, &Table::new()).unwrap();
        assert_eq!(a, b);

        let c = compile(&script, 1, &Table::new()).unwrap();
        assert_ne!(a.world, c.world);
    }

    struct Typo;

    impl SceneScript for Typo {
        fn name(&self) -> &'static str {
            "typo"
        }
        fn scene(&self, _rng: &mut Generator) -> Result<Vec<Shape>> {
            Ok(Vec::new())
        }
        fn config(&self) -> Result<Table> {
            parse_config("widht = 300")
        }
    }

    #[test]
    fn errors_stop_before_submit() {
        let mut engine = Recorder(Vec::new());
        let err = compile_and_submit(&Typo, 0, &Table::new(), &mut engine).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CompileError>(),
            Some(CompileError::UnknownConfigOption(_))
        ));
        assert!(engine.0.is_empty());
    }

    #[test]
    fn submitted_scene_is_the_compiled_one() {
        let mut engine = Recorder(Vec::new());
        let extra = parse_config("width = 320").unwrap();
        compile_and_submit(&examples::CornellBox, 0, &extra, &mut engine).unwrap();

        let expected = compile(&examples::CornellBox, 0, &extra).unwrap();
        assert_eq!(engine.0, vec![expected]);
        assert_eq!(engine.0[0].width, 320);
    }
}
