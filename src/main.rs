use clap::{Args, Parser, Subcommand, ValueEnum};
use diamonds::{
    Background, GradientKind, Hsla, Options, generate_layers, render_composite,
    render_composite_json, render_layers,
};
use diamonds::error::Result as DiamondsResult;
use std::error::Error;
use std::io::Read;
use std::path::{Path, PathBuf};

// --- Command Line ---

#[derive(Parser)]
#[command(name = "diamonds", version, about = "Randomized layered CSS gradients")]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a layer stack and print it
    Generate(GenerateArgs),
    /// Render a JSON array of layer descriptors as one CSS value
    Render {
        /// Descriptor file; stdin when omitted or "-"
        input: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, ValueEnum)]
enum KindArg {
    Linear,
    Radial,
}

impl From<KindArg> for GradientKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Linear => GradientKind::Linear,
            KindArg::Radial => GradientKind::Radial,
        }
    }
}

#[derive(Copy, Clone, Default, ValueEnum)]
enum Format {
    /// Single composite background value
    #[default]
    Css,
    /// One layer per line
    Lines,
    /// Layer descriptors as JSON
    Json,
}

#[derive(Args)]
struct GenerateArgs {
    /// JSON options file ("-" for stdin); flags below override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short = 't', long = "type", value_enum)]
    kind: Option<KindArg>,

    /// Explicit color as "h,s,l,a" (repeatable)
    #[arg(long = "color", value_parser = parse_color)]
    colors: Vec<Hsla>,

    #[arg(short = 'n', long)]
    random_colors: Option<usize>,

    /// "random" or "h,s,l,a"
    #[arg(short, long, value_parser = parse_background)]
    background: Option<Background>,

    #[arg(long)]
    shades: Option<usize>,

    #[arg(long)]
    shade_variance: Option<f64>,

    #[arg(long)]
    opacity: Option<f64>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(short, long, value_enum, default_value_t)]
    format: Format,
}

impl GenerateArgs {
    fn options(&self) -> Result<Options, Box<dyn Error>> {
        let mut options = match &self.config {
            Some(path) => Options::from_json(&read_input(Some(path.as_path()))?)?,
            None => Options::default(),
        };

        if let Some(kind) = self.kind {
            options.kind = kind.into();
        }
        if !self.colors.is_empty() {
            options.colors = Some(self.colors.clone());
        }
        if self.random_colors.is_some() {
            options.random_colors_number = self.random_colors;
        }
        if self.background.is_some() {
            options.background = self.background;
        }
        if self.shades.is_some() {
            options.shades = self.shades;
        }
        if self.shade_variance.is_some() {
            options.shade_variance = self.shade_variance;
        }
        if self.opacity.is_some() {
            options.opacity = self.opacity;
        }
        if self.seed.is_some() {
            options.seed = self.seed;
        }

        Ok(options)
    }
}

// --- Helper Functions ---

fn parse_color(text: &str) -> Result<Hsla, String> {
    let channels = text
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid channel in '{text}': {e}"))?;

    match channels[..] {
        [h, s, l] => Ok(Hsla::new(h, s, l, 1.0)),
        [h, s, l, a] => Ok(Hsla::new(h, s, l, a)),
        _ => Err(format!("expected 'h,s,l' or 'h,s,l,a', got '{text}'")),
    }
}

fn parse_background(text: &str) -> Result<Background, String> {
    if text.eq_ignore_ascii_case("random") {
        Ok(Background::Random)
    } else {
        parse_color(text).map(Background::Fixed)
    }
}

fn read_input(path: Option<&Path>) -> DiamondsResult<String> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

// --- Main Function ---
fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Generate(args) => {
            let options = args.options()?;
            let layers = generate_layers(&options)?;
            log::info!("generated {} layers", layers.len());

            match args.format {
                Format::Css => println!("{}", render_composite(&layers)),
                Format::Lines => {
                    for line in render_layers(&layers) {
                        println!("{line}");
                    }
                }
                Format::Json => println!("{}", serde_json::to_string_pretty(&layers)?),
            }
        }
        Command::Render { input } => {
            let text = read_input(input.as_deref())?;
            let values: Vec<serde_json::Value> = serde_json::from_str(&text)?;
            println!("{}", render_composite_json(&values)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_colors() {
        assert_eq!(parse_color("200, 50, 50, 1"), Ok(Hsla::new(200.0, 50.0, 50.0, 1.0)));
        assert_eq!(parse_color("10,20,30"), Ok(Hsla::new(10.0, 20.0, 30.0, 1.0)));
        assert!(parse_color("10,20").is_err());
        assert!(parse_color("a,b,c,d").is_err());
    }

    #[test]
    fn parses_background() {
        assert_eq!(parse_background("random"), Ok(Background::Random));
        assert_eq!(
            parse_background("0,0,0,1"),
            Ok(Background::Fixed(Hsla::new(0.0, 0.0, 0.0, 1.0)))
        );
    }

    #[test]
    fn flags_build_options() {
        let cli = Cli::try_parse_from([
            "diamonds", "generate", "-t", "radial", "--color", "200,50,50,1", "-n", "2",
            "--shades", "1", "--shade-variance", "4", "--seed", "7",
        ])
        .unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        let options = args.options().unwrap();

        assert_eq!(options.kind, GradientKind::Radial);
        assert_eq!(options.colors, Some(vec![Hsla::new(200.0, 50.0, 50.0, 1.0)]));
        assert_eq!(options.random_colors_number, Some(2));
        assert_eq!(options.shade_expansion(), Some((1, 4.0)));
        assert_eq!(options.seed, Some(7));
        assert_eq!(generate_layers(&options).unwrap().len(), 6);
    }

    #[test]
    fn missing_input_file_is_io_error() {
        let path = std::env::temp_dir().join("diamonds-no-such-options.json");
        assert!(matches!(
            read_input(Some(path.as_path())),
            Err(diamonds::DiamondsError::Io(_))
        ));
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
