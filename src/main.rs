//! # Userline Main Entry Point
//!
//! Parses arguments, sets up logging and either opens the interactive list or
//! prints one page when stdout is not a terminal (or `--print` is given).

use anyhow::Result;
use userline::browser::io::{TerminalEventStream, TerminalRenderStream};
use userline::cmd_args::CommandLineArgs;
use userline::logging::init_tracing_subscriber;
use userline::{print_user_list, AppController, HttpUserSource};

#[tokio::main]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();
    init_tracing_subscriber(cmd_args.log_file())?;

    let url = cmd_args.url();
    tracing::debug!("Using users endpoint '{}'", url);
    let source = HttpUserSource::new(url, cmd_args.timeout())?;

    let interactive = !cmd_args.print() && atty::is(atty::Stream::Stdout);
    if !interactive {
        let mut stdout = std::io::stdout();
        let loaded = print_user_list(&cmd_args, source, &mut stdout).await?;
        if !loaded {
            std::process::exit(1);
        }
        return Ok(());
    }

    let mut app = AppController::with_io_streams(
        &cmd_args,
        source,
        TerminalEventStream::new(),
        TerminalRenderStream::new(),
    )?;
    app.run().await
}
