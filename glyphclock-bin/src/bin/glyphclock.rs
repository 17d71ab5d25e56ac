use glyphclock::Color;
use glyphclock_bin as lib;
use std::convert::Infallible;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::process;

#[derive(Debug)]
pub struct Args {
    pub color: Option<String>,
    pub show_seconds: bool,
    pub center: bool,
    pub log_file: Option<OsString>,
}

fn help() {
    println!(
        r#"
glyphclock - A colorful clock for the terminal

Usage: glyphclock [OPTIONS]

Options:
    -c, --color NAME        Color of the clock (default BRIGHT_MAGENTA)
    -S, --no-seconds        Do not show seconds
    -C, --no-center         Do not center the clock in the terminal
        --list-colors       Print the available colors
        --log-file PATH     Append log output to PATH instead of stderr
    -h, --help              Print this help message

Colors:
    {}
"#,
        Color::NAMES.join(", ")
    );
}

fn args() -> anyhow::Result<Args> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        help();
        process::exit(0);
    }

    if args.contains("--list-colors") {
        for name in Color::NAMES {
            println!("{}", name);
        }
        process::exit(0);
    }

    let parsed = Args {
        color: args.opt_value_from_str(["-c", "--color"])?,
        show_seconds: !args.contains(["-S", "--no-seconds"]),
        center: !args.contains(["-C", "--no-center"]),
        log_file: args
            .opt_value_from_os_str::<_, _, Infallible>("--log-file", |f| Ok(f.to_owned()))?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        anyhow::bail!("unexpected arguments: {:?}", rest);
    }

    Ok(parsed)
}

fn init_logging(log_file: Option<&OsString>) -> io::Result<()> {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);

    // keep log lines out of the redrawn screen
    if let Some(path) = log_file {
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();

    Ok(())
}

fn app() -> anyhow::Result<()> {
    let args = match args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument error: {}", e);
            help();
            process::exit(1);
        }
    };

    init_logging(args.log_file.as_ref())?;

    let options = lib::DisplayOptions {
        show_seconds: args.show_seconds,
        center: args.center,
        color: match args.color.as_deref() {
            Some(name) => glyphclock::resolve(Some(name))?,
            None => lib::DisplayOptions::default().color,
        },
    };

    log::info!(
        "Starting clock: color {}, seconds {}, centered {}",
        options.color.name(),
        options.show_seconds,
        options.center
    );

    let interrupt = lib::Interrupt::install()?;

    lib::Controller::new(
        lib::LocalClock,
        interrupt,
        io::stdout().lock(),
        lib::TerminalColumns::default(),
        options,
    )
    .run()?;

    Ok(())
}

fn main() {
    if let Err(e) = app() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
