use clap::Parser;
use nanstdev::cli::{Args, log_level, run};
use simplelog::*;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    TermLogger::init(
        log_level(args.verbose),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    println!("{}", run(&args)?);
    Ok(())
}
