extern crate almanac as lib;

use flexi_logger::{FileSpec, Logger};
use lib::agenda::Agenda;
use lib::events::Dispatcher;
use lib::schedule::kind_label;
use lib::ui::app::App;
use nix::sys::termios;
use std::io::stdout;
use std::path::PathBuf;
use structopt::StructOpt;
use unsegen::base::Terminal;

#[derive(Debug, StructOpt)]
#[structopt(name = "alm", about = "Almanac - a terminal annual events calendar.")]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(
        short = "l",
        long = "list",
        help = "only list the year's events non-interactively"
    )]
    pub list: bool,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &'static str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    logger.start()?;

    let config = lib::config::load_suitable_config(args.configfile.as_deref())?;
    let agenda = Agenda::from_config(&config);

    if args.list {
        for event in agenda.events() {
            println!(
                "{:>2}/{:<2} {} ({}) [{}]",
                event.month,
                event.day,
                event.title,
                kind_label(event.kind),
                event.category
            );
        }
        return Ok(());
    }

    const TTY_FD: std::os::unix::io::RawFd = 0;
    let orig_attr = std::sync::Mutex::new(
        termios::tcgetattr(TTY_FD).expect("Failed to get terminal attributes"),
    );

    std::panic::set_hook(Box::new(move |info| {
        // Switch to main terminal screen
        println!("{}{}", termion::screen::ToMainScreen, termion::cursor::Show);

        let _ = termios::tcsetattr(TTY_FD, termios::SetArg::TCSANOW, &orig_attr.lock().unwrap());

        println!("Almanac ran into a fatal error!");

        println!("{}", info);
        println!("{:?}", backtrace::Backtrace::new());
    }));

    let dispatcher = Dispatcher::from_config(&config);

    // Setup unsegen terminal
    let stdout = stdout();
    let term = Terminal::new(stdout.lock())?;

    let mut app = App::new(&config, agenda);

    app.run(dispatcher, term)
}
