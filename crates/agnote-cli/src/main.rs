use agnote::{Cli, output, run};
use clap::Parser;
use clap::error::ErrorKind;

fn main() {
    // Reset SIGPIPE to default behavior to prevent panic on broken pipe
    // (e.g., when piping to `head` or `less` that exits early)
    #[cfg(unix)]
    reset_sigpipe();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            println!("{}", output::render_usage_error(&e));
            std::process::exit(1);
        }
    };
    agnote::logging::init_logging(cli.log_level);

    let rendered = run(cli).and_then(|report| Ok(output::render_report(&report)?));

    match rendered {
        Ok(text) => println!("{}", text),
        Err(e) => {
            tracing::debug!(error = ?e, "run failed");
            println!("{}", output::render_error(&e));
            std::process::exit(1);
        }
    }
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
