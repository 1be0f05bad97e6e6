//! MIPS32 simulator CLI.
//!
//! This binary wires the simulation library to the host: it performs
//! 1. **Argument parsing:** One positional program-image path plus optional
//!    trace/config switches.
//! 2. **Logging:** Installs a `tracing` subscriber on stderr; silent unless
//!    `--trace` is given or `RUST_LOG` is set.
//! 3. **Exit codes:** 0 on normal termination, 1 for usage/load failures,
//!    2 for runtime faults (unknown instruction or syscall, addressing
//!    error).

use std::fs;
use std::io::{self, BufReader};
use std::process;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use mipsim_core::sim::loader;
use mipsim_core::sys::Console;
use mipsim_core::{Config, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    version,
    about = "MIPS32 instruction-set simulator",
    long_about = "Execute a pre-assembled raw MIPS32 program image.\n\n\
        The image is placed at the conventional text base (0x00400000) and run\n\
        until the program issues the exit syscall. Program output goes to\n\
        stdout, followed by a dump of the 32 general-purpose registers."
)]
struct Cli {
    /// Path to the pre-assembled program image.
    file: String,

    /// Emit a per-instruction disassembly trace on stderr.
    #[arg(long)]
    trace: bool,

    /// JSON configuration file overriding memory size, entry PC, or initial $sp.
    #[arg(long)]
    config: Option<String>,

    /// Override the flat memory size in bytes.
    #[arg(long)]
    memory_size: Option<usize>,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version are not usage errors.
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            process::exit(code);
        }
    };

    init_logging(cli.trace);

    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("sim: {msg}");
            process::exit(1);
        }
    };
    config.trace = config.trace || cli.trace;
    if let Some(size) = cli.memory_size {
        config.memory_size = size;
    }

    let console = Console::new(BufReader::new(io::stdin()), io::stdout());
    let mut sim = Simulator::new(&config, console);

    if let Err(err) = loader::load_image(&mut sim.mem, &cli.file, config.entry_pc) {
        eprintln!("sim: {err}");
        process::exit(1);
    }

    match sim.run() {
        Ok(()) => {
            if let Err(err) = sim.dump_registers() {
                eprintln!("sim: {err}");
                process::exit(1);
            }
            println!();
        }
        Err(err) => {
            eprintln!("sim: {err}");
            process::exit(2);
        }
    }
}

/// Installs the stderr `tracing` subscriber.
///
/// `--trace` forces per-instruction events on; otherwise the `RUST_LOG`
/// environment variable decides and the default is silence.
fn init_logging(trace: bool) {
    let filter = if trace {
        EnvFilter::new("mipsim_core=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

/// Reads the JSON configuration file, or produces the defaults.
fn load_config(path: Option<&str>) -> Result<Config, String> {
    match path {
        None => Ok(Config::default()),
        Some(path) => {
            let text =
                fs::read_to_string(path).map_err(|e| format!("cannot read config '{path}': {e}"))?;
            Config::from_json(&text).map_err(|e| format!("bad config '{path}': {e}"))
        }
    }
}
