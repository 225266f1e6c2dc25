use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use dinograph::{
    config::{AppConfig, ConfigLoader},
    dataset::DinoLoader,
    human::HumanForm,
    rng, tiles, web,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Dinosaur comparison infographic")]
struct Cli {
    /// Path to a YAML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the dino data file (overrides config)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Directory holding tile images (overrides config)
    #[arg(long)]
    images: Option<PathBuf>,

    /// Host to bind the web UI on (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind the web UI on (overrides config)
    #[arg(long)]
    port: Option<u16>,

    /// Fixed RNG seed for a reproducible tile layout
    #[arg(long)]
    seed: Option<u64>,

    /// Render the infographic to the terminal for this name instead of
    /// serving the web UI
    #[arg(long)]
    name: Option<String>,

    /// Height, feet part (terminal mode)
    #[arg(long, default_value = "")]
    feet: String,

    /// Height, inches part (terminal mode)
    #[arg(long, default_value = "")]
    inches: String,

    /// Weight in pounds (terminal mode)
    #[arg(long, default_value = "")]
    weight: String,

    /// Diet (terminal mode)
    #[arg(long, default_value = "Omnivore")]
    diet: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ConfigLoader::new(".").load(path)?,
        None => AppConfig::default(),
    };
    if let Some(data) = cli.data {
        config.data_file = data;
    }
    if let Some(images) = cli.images {
        config.images_dir = images;
    }
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    if let Some(name) = cli.name {
        let form = HumanForm {
            name,
            feet: cli.feet,
            inches: cli.inches,
            weight: cli.weight,
            diet: cli.diet,
        };
        render_terminal(&config, &form)
    } else {
        web::run(config).await
    }
}

fn render_terminal(config: &AppConfig, form: &HumanForm) -> Result<()> {
    let human = form.validate()?;
    let dinos = DinoLoader::new(".")
        .load(&config.data_file)
        .context("loading dino data")?;
    let mut rng = rng::infographic_rng(config.seed);
    let tiles = tiles::build_tiles(&dinos, &human, &mut rng)?;

    for tile in &tiles {
        println!("{}", tile.name);
        if !tile.fact.is_empty() {
            println!("  {}", tile.fact);
        }
        println!("  [{}]", tile.image);
        println!();
    }
    Ok(())
}
