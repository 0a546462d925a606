use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use log::debug;

use modelgen::cli::{Cli, Command};
use modelgen::router::{classify, Category};
use modelgen::{Studio, StudioConfig};

struct GenerateArgs {
    prompt: String,
    detail: Option<f32>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    jitter_seed: Option<u64>,
    colors: bool,
    stdout: bool,
}

fn load_config(path: Option<&Path>) -> Result<StudioConfig> {
    match path {
        Some(path) => StudioConfig::load(path),
        None => Ok(StudioConfig::default()),
    }
}

fn run_generate(args: GenerateArgs, quiet: bool) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(output) = &args.output {
        config.set_output(output);
    }
    if args.colors {
        config.export.include_colors = true;
    }
    if args.jitter_seed.is_some() {
        config.jitter_seed = args.jitter_seed;
    }
    debug!("Studio config: {:?}", config);

    let detail = args.detail.unwrap_or(config.default_detail);
    let mut studio = Studio::new(config);
    studio.create_model_from_prompt(&args.prompt, detail);
    let text = studio.export();

    if args.stdout {
        print!("{}", text);
        return Ok(());
    }

    let path = studio.deliver(&text)?;
    if !quiet {
        if let Some(report) = studio.report() {
            println!(
                "{} (detail {:.2}): {} primitives, {} vertices, {} triangles",
                report.category, report.detail, report.primitives, report.vertices, report.triangles
            );
        }
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate {
            prompt,
            detail,
            output,
            config,
            jitter_seed,
            colors,
            stdout,
        } => run_generate(
            GenerateArgs {
                prompt,
                detail,
                output,
                config,
                jitter_seed,
                colors,
                stdout,
            },
            cli.quiet,
        )?,
        Command::Classify { prompt } => println!("{}", classify(&prompt)),
        Command::Categories => {
            for category in Category::ALL {
                let keywords = category.keywords();
                if keywords.is_empty() {
                    println!("{:<10} (anything else)", category);
                } else {
                    println!("{:<10} {}", category, keywords.join(", "));
                }
            }
        }
    }
    Ok(())
}
