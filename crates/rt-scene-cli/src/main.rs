mod output;
mod utils;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rt_scene::{
    scene::{compile, RenderEngine},
    utils::timer::{time_phase, Phase},
};
use utils::{AvailableOutput, AvailableScene, Overrides};

#[derive(Parser, Debug)]
pub struct Args {
    #[arg(long, value_enum, default_value_t)]
    /// Scene selector
    scene: AvailableScene,

    #[arg(long)]
    /// Seed of the procedural generator, defaults to the scene's own seed.
    /// Given a seed, the compiled scene is deterministic.
    seed: Option<u64>,

    #[arg(long)]
    /// TOML file of configuration overrides
    config: Option<PathBuf>,

    #[arg(long = "set", value_name = "KEY=VALUE")]
    /// Single override in TOML syntax, e.g. `width=300` or
    /// `camera={look_from=[0,1,5],look_at=[0,0,0]}`. Applied after `--config`
    overrides: Vec<String>,

    #[arg(short, long, value_enum, default_value_t)]
    output: AvailableOutput,

    #[arg(long, default_value = "scene.json")]
    /// Destination of the json output
    json_path: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let script = args.scene.script();
    let seed = args.seed.unwrap_or_else(|| script.default_seed());
    let extra = Overrides::load(args.config.as_deref(), &args.overrides)?;

    log::info!("compiling scene `{}` (seed {seed:#x})", script.name());
    let scene = time_phase(Phase::Compile, || compile(script, seed, &extra.into_table()))
        .with_context(|| format!("failed to compile scene `{}`", script.name()))?;

    let mut engine = args.output.engine(args.json_path);
    time_phase(Phase::Submit, || engine.submit(scene))?;

    Ok(())
}
