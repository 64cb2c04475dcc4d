use std::io;

use mruv_calculator::display::{MacroquadViewer, NoDisplay, display_available};
use mruv_calculator::settings::Settings;
use mruv_calculator::shell::{Shell, ShellError, run_session};

fn run() -> Result<(), ShellError> {
    let settings = Settings::default();
    let viewer = MacroquadViewer::new(settings.chart);
    let mut shell = Shell::new(io::stdin().lock(), io::stdout(), NoDisplay, settings);

    if !display_available() {
        log::info!("no graphical display, charts are disabled");
        return shell.run();
    }

    let conf = viewer.window_conf();
    run_session(shell, viewer, move |session| {
        macroquad::Window::from_config(conf, session);
    })
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("Erro: {err}");
        std::process::exit(1);
    }
}
