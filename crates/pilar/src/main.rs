//! # PILAR CLI
//!
//! A terminal client for the PILAR scan history. The binary is intentionally
//! thin: everything from `pilarapp::api` inward is UI agnostic, and this crate
//! only parses arguments, wires up logging and the context, dispatches to the
//! API and renders the returned `CmdResult`.
//!
//! ```text
//! cli/setup.rs     clap definitions
//! cli/commands.rs  context wiring + dispatch
//! cli/render.rs    terminal / JSON output
//! cli/logging.rs   tracing subscriber
//! ```

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
