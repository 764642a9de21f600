//! Generate a batch of demo cubes and dump the collected scene
//!
//! Mirrors the original CubeCreator flow: build the scene, attach a
//! handful of generated cube instances, hand the result to the export
//! side. Here the "export side" is the collected scene serialized as
//! JSON, either to stdout or to the file named by the first argument.

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use quadgen::{generate_instances, CollectedScene, GeneratorConfig, InstanceLayout};

fn main() -> Result<()> {
    env_logger::init();

    let config = GeneratorConfig {
        instance_count: 6,
        layout: InstanceLayout::Climb,
        ..Default::default()
    };
    config.validate()?;

    let mut scene = CollectedScene::new();
    let attached = generate_instances(&config, &mut scene, |_| 1.0)?;
    println!("Attached {} instances", attached);

    match std::env::args().nth(1) {
        Some(path) => {
            let file = File::create(&path).with_context(|| format!("creating {}", path))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &scene)?;
            writer.flush()?;
            println!("Scene written to {}", path);
        }
        None => {
            println!("No args: dumping scene to stdout");
            serde_json::to_writer_pretty(std::io::stdout().lock(), &scene)?;
            println!();
        }
    }

    Ok(())
}
