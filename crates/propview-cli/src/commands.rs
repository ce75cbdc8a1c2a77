use super::args::{Cli, Commands};
use super::handlers;
use anyhow::{Context, Result};
use propview_runtime::{Config, ImageFormat, resolve_config_path};

pub fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)
        .with_context(|| format!("loading config {}", config_path.display()))?;
    let format = cli.format;

    match cli.command {
        Commands::Categories => handlers::categories::handle(format),
        Commands::Fields { category } => handlers::fields::handle(&category, format),
        Commands::Validate { file } => handlers::validate::handle(&file, format),
        Commands::Show { file } => handlers::show::handle(&file, &config, format),
        Commands::Image {
            url,
            image_format,
            quality,
            width,
            srcset,
        } => handlers::image::handle(
            &url,
            ImageFormat::from(image_format),
            quality,
            width,
            srcset,
            &config,
            format,
        ),
        Commands::Resolve { file } => handlers::resolve::handle(&file, &config, format),
    }
}
