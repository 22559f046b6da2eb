use anyhow::{Context, Result};
use clap::Parser;
use icon_io::{generate_android, generate_ios, ErrorKind, GeneratedIcon, IconError};
use std::path::PathBuf;
use std::process::ExitCode;

/// Generate Android and iOS app icons from a single source image
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Source image, ideally a square PNG of 1024x1024 or larger
    source: PathBuf,

    /// Project root directory (default: current directory)
    output_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        // usage errors exit 1 like every other failure; --help/--version exit 0
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    if !args.source.exists() {
        eprintln!("Error: {}", IconError::InputNotFound(args.source.clone()));
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => {
            println!();
            println!("All app icons generated successfully!");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            let kind = err.downcast_ref::<IconError>().map(IconError::kind);
            if kind != Some(ErrorKind::InputNotFound) {
                eprintln!("{err:?}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("resolving current directory")?,
    };
    println!("Source image: {}", args.source.display());
    println!("Output directory: {}", output_dir.display());
    println!();

    let source = icon_io::load_source(&args.source)?;
    let img = icon_io::normalize(&source);
    drop(source);

    println!("Generating Android icons...");
    let android = generate_android(&img, &output_dir).context("generating Android icons")?;
    report(&android);
    println!();

    println!("Generating iOS icons...");
    let ios = generate_ios(&img, &output_dir).context("generating iOS icons")?;
    report(&ios.icons);
    println!("  Created {}", ios.manifest.display());
    log::info!(
        "wrote {} files under {}",
        android.len() + ios.icons.len() + 1,
        output_dir.display()
    );
    Ok(())
}

fn report(icons: &[GeneratedIcon]) {
    for icon in icons {
        println!("  Created {} ({}x{})", icon.path.display(), icon.edge, icon.edge);
    }
}
