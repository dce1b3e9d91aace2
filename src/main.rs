use std::fs::File;
use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use log::info;
use rand::SeedableRng;

use raytracing::config;
use raytracing::CrateRng;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = config::GLOBAL();
    let mut rng = match config.seed {
        Some(seed) => CrateRng::seed_from_u64(seed),
        None => CrateRng::from_entropy(),
    };

    let (mut builder, world) = config.scene.create(&mut rng);
    config.apply(&mut builder);
    let camera = builder
        .build()
        .with_context(|| format!("Invalid camera for scene {}", config.scene))?;
    info!("Scene {} has {} objects", config.scene, world.len());

    let screen = camera.render(&world, &mut rng);

    match &config.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Couldn't create {}", path.display()))?;
            screen.write_ppm(BufWriter::new(file))?;
            info!("Wrote {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            screen.write_ppm(BufWriter::new(stdout.lock()))?;
        }
    }

    Ok(())
}
