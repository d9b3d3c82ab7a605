use alfred_nodes::error::Error;
use alfred_nodes::{Args, report, respond};
use clap::error::ErrorKind;
use tracing::Level;

fn main() -> Result<(), Error> {
    let items = match Args::try_parse_split(std::env::args_os()) {
        Ok(args) => {
            init_logging(args.verbose);
            respond(&args)
        }
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                init_logging(0);
                tracing::debug!(error = %err, "could not parse arguments");
                report(&Error::InvalidArguments)
            }
        },
    };
    println!("{}", items.to_json()?);
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        // stdout belongs to Alfred
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
