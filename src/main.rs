// UID64 - mint identifiers from the command line
// Configured through UID64_* environment variables, see config.rs

use std::sync::Arc;
use tracing::info;

use uid64::{
    config::{Config, OutputFormat},
    infrastructure::initialize_tracing,
    Uid64, Uid64Generator,
};

fn mint_batch(generator: &Uid64Generator, count: usize, synchronized: bool) -> Vec<Uid64> {
    (0..count)
        .map(|_| {
            if synchronized {
                generator.create_new_sync()
            } else {
                generator.create_new()
            }
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    initialize_tracing("warn")?;

    let config = Config::from_env()?;
    let generator = Arc::new(Uid64Generator::from_config(&config.generator));
    let synchronized = config.generator.synchronized;
    let count = config.output.count;

    let ids: Vec<Uid64> = std::thread::scope(|scope| {
        let workers: Vec<_> = (0..config.output.workers)
            .map(|_| {
                let generator = Arc::clone(&generator);
                scope.spawn(move || mint_batch(&generator, count, synchronized))
            })
            .collect();

        workers
            .into_iter()
            .map(|worker| {
                worker
                    .join()
                    .map_err(|_| anyhow::anyhow!("UID64 worker thread panicked"))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map(|batches| batches.into_iter().flatten().collect())
    })?;

    match config.output.format {
        OutputFormat::Hex => ids.iter().for_each(|id| println!("{}", id)),
        OutputFormat::Int => ids.iter().for_each(|id| println!("{}", id.value())),
        OutputFormat::Json => {
            let report = serde_json::json!({
                "ids": ids.iter().map(|id| id.to_hex_string()).collect::<Vec<_>>(),
                "stats": generator.stats(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    info!(stats = ?generator.stats(), "Done");
    Ok(())
}
