use minish::config::ShellConfig;
use minish::flags::Flags;
use minish::shell::Shell;
use std::env;

fn main() -> Result<(), minish::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("minish {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = ShellConfig::from(&flags);
    let mut logger = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level().to_string()),
    );
    if config.debug {
        logger.filter_level(config.log_level());
    }
    logger.init();

    let mut shell = Shell::new(config)?;
    shell.run()
}
