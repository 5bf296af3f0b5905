use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use wsstego::cli::{
    analyze_file, show_bits, show_hexdump, show_visible, AnalyzeOptions, DEFAULT_HEX_LIMIT,
};
use wsstego::BitAssignment;

/// Version info from build.rs
const VERSION: &str = env!("WSSTEGO_VERSION");
const BUILD: &str = env!("WSSTEGO_BUILD");
const PROFILE: &str = env!("WSSTEGO_PROFILE");
const GIT_HASH: &str = env!("WSSTEGO_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "wsstego")]
#[command(author, about = "Whitespace steganography analyzer", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Log decoder details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report every candidate decoding of a file
    #[command(alias = "a")]
    Analyze {
        /// Text file to analyze
        file: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Bit symbols shown per bit string
        #[arg(long, default_value_t = 80)]
        preview: usize,
    },

    /// Print the full bit string under one assignment
    #[command(alias = "b")]
    Bits {
        /// Text file to map
        file: PathBuf,

        /// Bit assignment (space0 or space1)
        #[arg(long, default_value = "space0", value_parser = parse_assignment)]
        assignment: BitAssignment,
    },

    /// Show whitespace as visible symbols
    #[command(alias = "v")]
    Visible {
        /// Text file to render
        file: PathBuf,
    },

    /// Hex dump of the start of a file
    #[command(alias = "x")]
    Hexdump {
        /// File to dump
        file: PathBuf,

        /// Number of bytes to show
        #[arg(long, default_value_t = DEFAULT_HEX_LIMIT)]
        limit: usize,
    },
}

fn parse_assignment(s: &str) -> Result<BitAssignment, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("wsstego {}", get_version());
        return ExitCode::SUCCESS;
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            if let Err(e) = Cli::command().print_help() {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
            println!();
            return ExitCode::SUCCESS;
        }
    };

    init_tracing(cli.verbose);

    let result = match command {
        Commands::Analyze {
            file,
            json,
            preview,
        } => {
            let options = AnalyzeOptions { json, preview };
            analyze_file(&file, &options)
        }
        Commands::Bits { file, assignment } => show_bits(&file, assignment),
        Commands::Visible { file } => show_visible(&file),
        Commands::Hexdump { file, limit } => show_hexdump(&file, limit),
    };

    match result {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
