use anyhow::Context;

use gildedrose_cli::{run, SimulationConfig};
use gildedrose_inventory::{load_items, standard_inventory};

fn main() -> anyhow::Result<()> {
    gildedrose_observability::init();

    let config = SimulationConfig::from_env()?;

    let items = match &config.items_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let items = load_items(&json)?;
            tracing::info!(path = %path.display(), items = items.len(), "loaded inventory");
            items
        }
        None => standard_inventory(),
    };

    tracing::info!(days = config.days, items = items.len(), "starting simulation");

    let stdout = std::io::stdout();
    let engine = run(items, config.days, &mut stdout.lock()).context("failed to write report")?;

    tracing::info!(day = engine.day(), "simulation finished");
    Ok(())
}
