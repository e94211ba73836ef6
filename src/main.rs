use clap::{Parser, Subcommand};
use volcalc::config::Config;
use volcalc::form::FormFields;
use volcalc::geometry::{Shape, UnitSystem};
use volcalc::render::{self, OutputFormat};
use volcalc::VolumeCalculator;

#[derive(Parser)]
#[command(name = "volcalc")]
#[command(about = "Volume calculator for spheres, cones and cylinders", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the volume of a shape
    Compute {
        /// Unit system (english or metric)
        #[arg(short, long)]
        units: Option<String>,

        /// Shape name (Sphere, Cone or Cylinder)
        #[arg(short, long)]
        shape: Option<String>,

        /// Radius
        #[arg(short, long)]
        radius: String,

        /// Height (ignored for a sphere)
        #[arg(short = 'H', long)]
        height: Option<String>,

        /// Output format (default from config, else text)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List supported shapes and their formulas
    Shapes {
        /// Unit system used in the formula text
        #[arg(short, long, default_value = "english")]
        units: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Compute {
            units,
            shape,
            radius,
            height,
            format,
        } => compute_volume(
            cli.config.as_deref(),
            units,
            shape,
            radius,
            height,
            format,
        ),
        Commands::Shapes { units } => list_shapes(&units),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            tracing::debug!(path, "loading config");
            Ok(Config::load_from_file(path)?)
        }
        None => Ok(Config::empty()),
    }
}

fn compute_volume(
    config_path: Option<&str>,
    units: Option<String>,
    shape: Option<String>,
    radius: String,
    height: Option<String>,
    format: Option<OutputFormat>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let mut calculator = VolumeCalculator::new(&config);

    // Unset selectors keep the form defaults
    let defaults = calculator.form().clone();
    let form = FormFields::new(
        units.unwrap_or(defaults.units),
        shape.unwrap_or(defaults.shape),
        radius,
        height.unwrap_or_default(),
    );

    let record = calculator.calculate(form)?;
    let format = format.unwrap_or(config.display.format);
    print!("{}", render::render(record, format)?);
    if format == OutputFormat::Json {
        println!();
    }

    Ok(())
}

fn list_shapes(units: &str) -> Result<(), Box<dyn std::error::Error>> {
    let units: UnitSystem = units.parse()?;
    let label = units.label();

    println!("Units: {} ({})", label.display_label, label.symbol);
    for shape in Shape::ALL {
        let height = if shape.uses_height() {
            "radius, height"
        } else {
            "radius"
        };
        println!("  - {:<8} {:<22} [{}]", shape.name(), shape.formula(units), height);
    }

    Ok(())
}
