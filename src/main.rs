use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

use zplane::config::ZplaneConfig;
use zplane::designer::Designer;
use zplane::synthesis::Prototype;

/// Pole-zero IIR filter designer core
///
/// Non-interactive front end over the designer: load or design a filter,
/// then dump coefficients, response curves, or a filtered sample file.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Design a library prototype
    #[arg(long, value_enum)]
    prototype: Option<Prototype>,

    /// Load a filter file (CSV: Type,Real,Imaginary)
    #[arg(long)]
    load: Option<PathBuf>,

    /// Save the resulting root set to a filter file
    #[arg(long)]
    save: Option<PathBuf>,

    /// Select all-pass sections by name, comma separated
    #[arg(long)]
    sections: Option<String>,

    /// Build a custom all-pass section from comma-separated real zeros
    #[arg(long)]
    arbitrary: Option<String>,

    /// Number of frequency-response points
    #[arg(long, default_value_t = 500)]
    points: usize,

    /// Print the transfer-function coefficients
    #[arg(long)]
    coefficients: bool,

    /// Print magnitude/phase response as JSON
    #[arg(long)]
    response: bool,

    /// Filter a sample file (one value per line) and print the output
    #[arg(long)]
    filter: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct CoefficientDump {
    b: Vec<f64>,
    a: Vec<f64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = ZplaneConfig::default();
    config.designer.response_points = args.points;
    let mut designer = Designer::new(config);

    if let Some(path) = &args.load {
        designer.load_from(path)?;
        println!(
            "Loaded {} zeros, {} poles from {}",
            designer.root_set().zeros.len(),
            designer.root_set().poles.len(),
            path.display()
        );
    }

    if args.prototype.is_some() {
        designer.select_prototype(args.prototype)?;
        println!("Designed {}", args.prototype.unwrap());
    }

    if let Some(sections) = &args.sections {
        let names: Vec<&str> = sections.split(',').map(str::trim).collect();
        designer.select_sections(&names)?;
        println!("Cascade: {}", names.join(", "));
    }

    if let Some(zeros) = &args.arbitrary {
        designer.add_arbitrary_section(zeros)?;
        println!("Cascade: custom section from zeros [{zeros}]");
    }

    if let Some(path) = &args.save {
        designer.save_to(path)?;
        println!("Saved filter to {}", path.display());
    }

    if args.coefficients {
        let (b, a) = designer.real_coefficients()?;
        let dump = CoefficientDump { b, a };
        println!("{}", serde_json::to_string_pretty(&dump)?);
    }

    if args.response {
        let response = designer.response()?;
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    if let Some(path) = &args.filter {
        let contents = std::fs::read_to_string(path)?;
        let samples = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.parse::<f64>()
                    .map_err(|_| anyhow::anyhow!("'{line}' is not a number"))
            })
            .collect::<anyhow::Result<Vec<f64>>>()?;
        let filtered = designer.filter_samples(&samples)?;
        for value in filtered {
            println!("{value}");
        }
    }

    Ok(())
}
