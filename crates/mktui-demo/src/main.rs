#![forbid(unsafe_code)]

use std::process;
use std::rc::Rc;
use std::time::Duration;

use mktui_demo::app::AppModel;
use mktui_demo::cli::Opts;
use mktui_demo::logging;
use mktui_model::{Cart, demo_catalog};
use mktui_term::{Program, ProgramConfig};

fn main() {
    let opts = Opts::parse();
    if let Err(error) = logging::init(opts.log_file.as_deref()) {
        eprintln!("failed to open log file: {error}");
        process::exit(1);
    }

    let mut app = AppModel::new(Rc::new(demo_catalog()), Cart::empty());
    app.select_tab(opts.start_tab.saturating_sub(1));

    let config = ProgramConfig {
        tick: Duration::from_millis(opts.tick_ms),
        exit_after: (opts.exit_after_ms > 0).then(|| Duration::from_millis(opts.exit_after_ms)),
        ..ProgramConfig::default()
    };
    if let Err(error) = Program::new(config).run(&mut app) {
        eprintln!("{error}");
        process::exit(1);
    }
}
