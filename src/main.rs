use clap::Parser;
use picklist::core::config::{self, PicklistConfig, ResolvedConfig, StartupLog};
use picklist::{SessionResult, Terminal, run_selection};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::io::{self, Write};
use std::process::ExitCode;

/// Exit status when the user cancels, matching a shell's Ctrl+C convention.
const EXIT_CANCELLED: u8 = 130;

#[derive(Parser)]
#[command(name = "picklist", about = "Pick one option from a list with the arrow keys")]
struct Args {
    /// Prompt shown above the options
    #[arg(short, long, default_value = "select")]
    label: String,

    /// Options visible at once (1-25)
    #[arg(short, long)]
    window_size: Option<usize>,

    /// Options to choose from. Runs the built-in demo lists when omitted.
    options: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let mut startup = StartupLog::new();
    let file_config = match config::load_config(&mut startup) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}, using defaults");
            startup.push(log::Level::Warn, format!("{e}, using defaults"));
            PicklistConfig::default()
        }
    };
    let config = config::resolve(&file_config, args.window_size, &mut startup);
    init_logger(&config);
    startup.replay();

    log::info!("Picklist starting with window_size {}", config.window_size);

    let mut terminal = match Terminal::init(&config) {
        Ok(terminal) => terminal,
        Err(e) => {
            eprintln!("failed to set up terminal: {e}");
            return ExitCode::FAILURE;
        }
    };

    let sessions = if args.options.is_empty() {
        demo_sessions()
    } else {
        vec![(args.label, args.options)]
    };

    for (label, options) in &sessions {
        match run_selection(&mut terminal, options, label) {
            Ok(SessionResult::Selected(index)) => {
                if let Err(e) = report_index(&mut io::stdout(), index) {
                    drop(terminal);
                    eprintln!("{e}");
                    return ExitCode::FAILURE;
                }
            }
            Ok(SessionResult::Cancelled) => {
                drop(terminal);
                return ExitCode::from(EXIT_CANCELLED);
            }
            Err(e) => {
                drop(terminal);
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        }
    }
    drop(terminal);
    ExitCode::SUCCESS
}

/// Print a chosen index as soon as its session ends. Raw mode is still on,
/// so the line ends in `\r\n`.
fn report_index<W: Write>(out: &mut W, index: usize) -> io::Result<()> {
    write!(out, "{index}\r\n")?;
    out.flush()
}

/// Writes logs to a file. The terminal itself is the render surface.
fn init_logger(config: &ResolvedConfig) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

fn demo_sessions() -> Vec<(String, Vec<String>)> {
    vec![
        (
            "options".to_string(),
            (1..=9).map(|i| format!("option {i}")).collect(),
        ),
        (
            "things".to_string(),
            (1..=10).map(|i| format!("thing {i}")).collect(),
        ),
    ]
}
