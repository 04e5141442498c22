mod error_formatter;
mod formatter;
mod interactive;
mod server;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use formatter::Formatter;
use galaxy::{Engine, EngineConfig, ResourceLimits};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "galaxy")]
#[command(about = "A merchant's guide to alien numerals.")]
#[command(
    long_about = "Galaxy learns what alien symbols and metals are worth from plain statements and answers questions about them.\nStatements and questions are read one per line from a file or standard input."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer the questions in a file of merchant's notes
    ///
    /// Learns every definition ("glob is I") and declaration
    /// ("glob glob Silver is 34 Credits") in the input, then prints one
    /// answer per question line, in input order.
    Run {
        /// Input file, or '-' for standard input (default: standard input)
        file: Option<PathBuf>,
        /// Print a JSON response with per-answer details and the learned lexicon
        #[arg(long)]
        json: bool,
        /// Prompt for the input file location
        #[arg(short = 'i', long)]
        interactive: bool,
        #[command(flatten)]
        options: EngineOptions,
    },
    /// Show the symbols and metal prices learned from a file
    Show {
        /// Input file, or '-' for standard input (default: standard input)
        file: Option<PathBuf>,
        #[command(flatten)]
        options: EngineOptions,
    },
    /// Convert between integers and roman numerals
    ///
    /// Examples:
    ///   galaxy convert 1994      - prints MCMXCIV
    ///   galaxy convert MCMXCIV   - prints 1994
    Convert {
        /// An integer from 1 to 3998, or a roman numeral
        value: String,
    },
    /// Start HTTP REST API server (default: localhost:3000)
    ///
    /// API: POST /answer with {"lines": [...]}
    Server {
        /// Host address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port number to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,
        #[command(flatten)]
        options: EngineOptions,
    },
}

#[derive(Args, Clone, Debug)]
struct EngineOptions {
    /// Recognise an additional metal name (repeatable)
    #[arg(short = 'm', long = "metal", value_name = "NAME")]
    metals: Vec<String>,
    /// Maximum number of input lines
    #[arg(long, default_value_t = ResourceLimits::default().max_lines)]
    max_lines: usize,
    /// Maximum length of a single input line, in bytes
    #[arg(long, default_value_t = ResourceLimits::default().max_line_bytes)]
    max_line_bytes: usize,
}

impl EngineOptions {
    fn config(&self) -> EngineConfig {
        let limits = ResourceLimits {
            max_lines: self.max_lines,
            max_line_bytes: self.max_line_bytes,
            ..ResourceLimits::default()
        };
        self.metals
            .iter()
            .fold(EngineConfig::default().with_limits(limits), |config, metal| {
                config.with_metal(metal.clone())
            })
    }
}

fn main() {
    let cli = Cli::parse();

    let default_filter = match cli.command {
        Commands::Server { .. } => "galaxy=info,tower_http=info",
        _ => "galaxy=warn",
    };
    init_tracing(default_filter);

    let result = match &cli.command {
        Commands::Run {
            file,
            json,
            interactive,
            options,
        } => run_command(file.as_deref(), *json, *interactive, options),
        Commands::Show { file, options } => show_command(file.as_deref(), options),
        Commands::Convert { value } => convert_command(value),
        Commands::Server {
            host,
            port,
            options,
        } => server_command(host, *port, options),
    };

    if let Err(e) = result {
        if let Some(galaxy_err) = e.downcast_ref::<galaxy::GalaxyError>() {
            eprintln!("{}", error_formatter::format_error(galaxy_err, &source_name(&e)));
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run_command(
    file: Option<&Path>,
    json: bool,
    interactive: bool,
    options: &EngineOptions,
) -> Result<()> {
    let file = if interactive {
        Some(interactive::prompt_input_file()?)
    } else {
        file.map(Path::to_path_buf)
    };
    let input = read_input(file.as_deref())?;

    let mut engine = Engine::with_config(options.config());
    let response = engine.run(&input.lines).map_err(|e| input.tag(e))?;

    let formatter = Formatter::default();
    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", formatter.format_answers(&response));
    }

    Ok(())
}

fn show_command(file: Option<&Path>, options: &EngineOptions) -> Result<()> {
    let input = read_input(file)?;

    let mut engine = Engine::with_config(options.config());
    let classified = engine.learn(&input.lines).map_err(|e| input.tag(e))?;

    let formatter = Formatter::default();
    print!(
        "{}",
        formatter.format_lexicon(
            engine.lexicon(),
            classified.definitions.len(),
            classified.declarations.len(),
            classified.questions.len(),
        )
    );

    Ok(())
}

fn convert_command(value: &str) -> Result<()> {
    let converted = match value.parse::<u32>() {
        Ok(number) => galaxy::encode(number)?,
        Err(_) => galaxy::decode(&value.to_ascii_uppercase())?.to_string(),
    };
    println!("{}", converted);
    Ok(())
}

fn server_command(host: &str, port: u16, options: &EngineOptions) -> Result<()> {
    #[cfg(feature = "server")]
    {
        use tokio::runtime::Runtime;
        let rt = Runtime::new()?;
        rt.block_on(server::http::start_server(options.config(), host, port))?;
    }

    #[cfg(not(feature = "server"))]
    {
        let _ = (host, port, options);
        eprintln!("Error: Server feature not enabled");
        eprintln!("Recompile with: cargo build --features server");
        std::process::exit(1);
    }

    Ok(())
}

/// Trimmed, non-blank input lines with their line numbers in the source
struct Input {
    source_id: String,
    lines: Vec<String>,
    line_numbers: Vec<usize>,
}

impl Input {
    /// Attach the source name to an engine error, translating its line
    /// number back to the line in the source
    fn tag(&self, err: galaxy::GalaxyError) -> anyhow::Error {
        let err = match err {
            galaxy::GalaxyError::Statement {
                line,
                text,
                span,
                source,
            } => galaxy::GalaxyError::Statement {
                line: self.line_numbers.get(line - 1).copied().unwrap_or(line),
                text,
                span,
                source,
            },
            other => other,
        };
        anyhow::Error::new(err).context(SourceName(self.source_id.clone()))
    }
}

/// Read `file`, or standard input when the file is absent or '-'
fn read_input(file: Option<&Path>) -> Result<Input> {
    let (source_id, content) = match file {
        Some(path) if path != Path::new("-") => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            (path.to_string_lossy().to_string(), content)
        }
        _ => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read standard input")?;
            ("<stdin>".to_string(), content)
        }
    };

    let (line_numbers, lines): (Vec<usize>, Vec<String>) = content
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(number, line)| (number, line.to_string()))
        .unzip();

    Ok(Input {
        source_id,
        lines,
        line_numbers,
    })
}

/// Name of the input an error came from, for error reports
#[derive(Debug)]
struct SourceName(String);

impl std::fmt::Display for SourceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn source_name(err: &anyhow::Error) -> String {
    err.downcast_ref::<SourceName>()
        .map(|s| s.0.clone())
        .unwrap_or_else(|| "<input>".to_string())
}
