use creasekit::{init_logging, parse_args, run, Invocation, BUILD_DATE, USAGE, VERSION};

fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::debug!("creasekit {} built {}", VERSION, BUILD_DATE);

    match parse_args(std::env::args().skip(1))? {
        Invocation::Help => println!("{USAGE}"),
        Invocation::Generate(command) => run(&command)?,
    }

    Ok(())
}
