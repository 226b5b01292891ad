use std::io::BufRead;
use std::sync::mpsc;
use std::thread;

use mystic_client::ClientError;
use mystic_core::{update, AppState, Msg};
use mystic_logging::mystic_info;

use crate::effects::EffectRunner;
use crate::{config, input, render};

/// Everything the main loop reacts to: core messages (from the user or the
/// service pump) plus view-only requests that never touch the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Core(Msg),
    OpenSaved,
    OpenReading,
    Help,
    Unknown(String),
    Quit,
}

/// Which of the two terminal views is showing. Routing lives entirely in
/// the app; the state machine is agnostic to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Reading,
    Saved,
}

pub fn run_app() -> Result<(), ClientError> {
    let settings = config::client_settings();
    mystic_info!("starting with base url {}", settings.base_url);

    let (event_tx, event_rx) = mpsc::channel::<Event>();
    let runner = EffectRunner::new(settings, event_tx.clone())?;
    spawn_input_thread(event_tx);

    let mut state = AppState::new();
    let mut screen = Screen::Reading;
    render::render(&state.view(), screen);
    render::render_help();

    while let Ok(event) = event_rx.recv() {
        match event {
            Event::Core(msg) => dispatch(&mut state, &runner, screen, msg),
            Event::OpenSaved => {
                screen = Screen::Saved;
                dispatch(&mut state, &runner, screen, Msg::SavedViewOpened);
            }
            Event::OpenReading => {
                screen = Screen::Reading;
                render::render(&state.view(), screen);
            }
            Event::Help => render::render_help(),
            Event::Unknown(line) => render::render_unknown(&line),
            Event::Quit => break,
        }
    }

    mystic_info!("shutting down");
    Ok(())
}

fn dispatch(state: &mut AppState, runner: &EffectRunner, screen: Screen, msg: Msg) {
    let (next, effects) = update(std::mem::take(state), msg);
    *state = next;
    runner.run(effects);
    if state.consume_dirty() {
        render::render(&state.view(), screen);
    }
}

fn spawn_input_thread(event_tx: mpsc::Sender<Event>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                let _ = event_tx.send(Event::Quit);
                return;
            };
            let Some(event) = input::parse(&line) else {
                continue;
            };
            let quitting = event == Event::Quit;
            if event_tx.send(event).is_err() || quitting {
                return;
            }
        }
        // Input closed; treat like a quit request.
        let _ = event_tx.send(Event::Quit);
    });
}
