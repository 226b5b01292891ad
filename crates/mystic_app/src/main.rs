mod app;
mod config;
mod effects;
mod input;
mod logging;
mod render;

fn main() {
    logging::initialize(logging::LogDestination::File);

    if let Err(err) = app::run_app() {
        eprintln!("fatal: {err}");
        std::process::exit(1);
    }
}
