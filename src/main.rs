use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use urlencode::{
    cli::{self, Args, CliError, Config},
    utils::{color::colorize, set_global_log_level, LogLevel},
};

fn main() -> ExitCode {
    let args = Args::parse();
    if args.verbose {
        set_global_log_level(LogLevel::Debug);
    }

    match try_main(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_err(&err);
            let cli_err = err.downcast_ref::<CliError>();
            if let Some(CliError::InvalidEncoding(_)) = cli_err {
                print!("{}", cli::encodings_message());
            }
            ExitCode::from(cli_err.map_or(2, CliError::exit_code))
        }
    }
}

fn try_main(args: &Args) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let config = Config::from_args(args, stdout.is_terminal())?;

    let mut out = io::BufWriter::new(stdout.lock());
    cli::run(&config, io::stdin().lock(), &mut out)?;
    out.flush().context("failed to flush STDOUT")?;
    Ok(())
}

fn print_err(err: &anyhow::Error) {
    let program = std::env::args().next().unwrap_or_else(|| "urlencode".to_string());
    let program = format!("{}:", program);

    if io::stderr().is_terminal() {
        eprintln!("{} {} {:#}", colorize(&program, "3;31"), colorize("err:", "1;91"), err);
    } else {
        eprintln!("{} err: {:#}", program, err);
    }
}
