//! Flowchart CLI
//!
//! Converts a Python file into a flowchart graph and prints it as JSON or DOT.
//!
//! # Usage
//!
//! ```bash
//! # JSON to stdout
//! flowchart script.py --pretty
//!
//! # DOT from stdin, rendered left to right
//! cat script.py | flowchart - --format dot --direction lr | dot -Tsvg > out.svg
//!
//! # Settings from a YAML file, flags override
//! flowchart script.py --config flowchart.yaml --layer-strategy nesting-depth
//! ```
//!
//! Exit code 0 on success, 1 on any parse, config or IO failure.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser as ClapParser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use flowchart_ir::config::{Direction, FlowchartConfig, LayerStrategy, OutputFormat};
use flowchart_ir::{to_dot, to_json, ConvertSourceUseCase, Flowchart, FlowchartError, Result, TreeSitterParser};

#[derive(ClapParser)]
#[command(name = "flowchart")]
#[command(about = "Convert Python source into a flowchart graph", long_about = None)]
struct Cli {
    /// Python source file, or `-` for stdin
    input: String,

    /// Output format (json, dot)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Indent JSON output
    #[arg(long)]
    pretty: bool,

    /// Layout direction (tb, lr)
    #[arg(long)]
    direction: Option<Direction>,

    /// Layer assignment (global-max, nesting-depth)
    #[arg(long)]
    layer_strategy: Option<LayerStrategy>,

    /// Treat async def/for/with like their sync forms
    #[arg(long)]
    include_async: bool,

    /// Convert what parses instead of failing on syntax errors
    #[arg(long)]
    allow_syntax_errors: bool,

    /// YAML settings file (version: 1)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// File settings first, then flags on top
    fn resolve_config(&self) -> Result<FlowchartConfig> {
        let mut config = match &self.config {
            Some(path) => FlowchartConfig::from_yaml(path)
                .map_err(|e| FlowchartError::from(e).with_file(path.display().to_string()))?,
            None => FlowchartConfig::default(),
        };

        if let Some(strategy) = self.layer_strategy {
            config.layer_strategy = strategy;
        }
        if self.include_async {
            config.include_async = true;
        }
        if self.allow_syntax_errors {
            config.allow_syntax_errors = true;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(direction) = self.direction {
            config.output.direction = direction;
        }
        if self.pretty {
            config.output.pretty = true;
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.resolve_config()?;
    debug!(?config, "resolved configuration");

    let output_config = config.output;
    let use_case = ConvertSourceUseCase::new(TreeSitterParser::python(), config);
    let chart = if cli.input == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(|e| FlowchartError::from(e).with_file("<stdin>"))?;
        use_case.execute(&source, "<stdin>")?
    } else {
        use_case.execute_path(Path::new(&cli.input))?
    };

    let rendered = render(&chart, output_config.format, output_config.pretty, output_config.direction)?;
    match &cli.output {
        Some(path) => std::fs::write(path, rendered)
            .map_err(|e| FlowchartError::from(e).with_file(path.display().to_string()))?,
        None => println!("{}", rendered),
    }
    Ok(())
}

fn render(chart: &Flowchart, format: OutputFormat, pretty: bool, direction: Direction) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(chart, pretty),
        OutputFormat::Dot => Ok(to_dot(chart, direction)),
    }
}
