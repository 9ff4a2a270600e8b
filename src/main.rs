mod run;

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let mut args: Vec<String> = std::env::args().collect();
    let verbose = run::take_verbose_flag(&mut args);
    init_logging(verbose);

    match args.len() {
        2.. => run::as_cli(&args),
        _ => {
            run::print_usage();
            Ok(())
        }
    }
}

/// `RUST_LOG` wins, then `--verbose`, else warnings only.
fn init_logging(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
