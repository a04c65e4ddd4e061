use clap::Parser;

use colorpoint::cli::Cli;

const fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set.
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level(cli.verbose)),
    )
    .format_timestamp(None)
    .init();

    let exit_code = colorpoint::commands::run(&cli);

    std::process::exit(exit_code);
}
