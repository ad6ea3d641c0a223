use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser as _;
use log::{debug, info};
use parsnip::core::Parser;
use serde::Serialize;

mod shapes;
use shapes::Shape;

#[derive(clap::Parser)]
#[command(version)]
struct CliArgs {
    file: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = Shape::Ints)]
    shape: Shape,
    #[arg(short, long)]
    pretty: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();
    let file = args.file.unwrap_or(PathBuf::from("input.txt"));
    let input = read_input(&file)?;
    debug!("read {} bytes from {}", input.len(), file.display());

    let json = match args.shape {
        Shape::Ints => to_json(shapes::ints(), &input, args.pretty),
        Shape::Doubles => to_json(shapes::doubles(), &input, args.pretty),
        Shape::Bools => to_json(shapes::bools(), &input, args.pretty),
        Shape::Words => to_json(shapes::words(), &input, args.pretty),
        Shape::Grid => to_json(shapes::grid(), &input, args.pretty),
    }
    .with_context(|| format!("Could not read {} as {:?}", file.display(), args.shape))?;

    println!("{json}");
    Ok(())
}

fn read_input(file: impl AsRef<Path>) -> Result<String> {
    let file = file.as_ref();
    let input = std::fs::read_to_string(file)
        .with_context(|| format!("File not found: {}", file.display()))?;
    Ok(input.replace("\r\n", "\n"))
}

fn to_json<P>(grammar: P, input: &str, pretty: bool) -> Result<String>
where
    P: Parser,
    P::Expression: Serialize,
{
    let start = Instant::now();
    let (value, rest) = grammar.run(input)?;
    info!("parsed input in {:?}", start.elapsed());

    if !rest.is_empty() {
        let offset = input.len() - rest.len();
        let line = input[..offset].matches('\n').count() + 1;
        bail!("unexpected input on line {line}: {:?}", rest.lines().next().unwrap_or(rest));
    }

    let json = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(json)
}
