use anyhow::Result;
use clap::Parser;

use filediff::{
    cli::{Cli, OutputFormat},
    config::FileDiffConfig,
    diff::{compare, DiffFormatter},
    export::{DiffExporter, ExportConfig},
    loader::FileLoader,
    merge,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(err) = cli.validate() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    cli.setup_logging();

    let config = FileDiffConfig::load_or_default(cli.config.as_deref())?;
    config.validate()?;
    let width = cli.width.unwrap_or(config.display.width);

    tracing::info!(
        "Comparing {} and {}",
        cli.left.display(),
        cli.right.display()
    );

    let loader = FileLoader::new(config.loader.size_warn_bytes);
    let (left_text, right_text) = loader.load_pair(&cli.left, &cli.right)?;
    let result = compare(&left_text, &right_text);

    let color = !cli.no_color;
    match cli.output {
        OutputFormat::SideBySide => {
            println!(
                "{}",
                DiffFormatter::format_side_by_side(&result, &cli.left, &cli.right, width, color)
            );
        }
        OutputFormat::Unified => {
            println!(
                "{}",
                DiffFormatter::format_unified(&result, &cli.left, &cli.right, color)
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Stats => {
            println!("{}", DiffFormatter::format_stats(&result));
        }
    }

    if let Some(export_path) = &cli.export {
        let exporter = DiffExporter::new(ExportConfig {
            format: cli.export_format(),
            width,
            ..Default::default()
        });
        exporter.export_diff(&result, &cli.left, &cli.right, export_path)?;
        tracing::info!("Exported comparison to {}", export_path.display());
    }

    if let Some(output) = &cli.merge_into {
        merge::merge_files(&cli.left, &cli.right, output)?;
        tracing::info!("Wrote merged output to {}", output.display());
    }

    if let Some(direction) = cli.apply {
        merge::apply_changes(&cli.left, &cli.right, direction)?;
    }

    Ok(())
}
