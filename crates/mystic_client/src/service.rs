use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use mystic_logging::mystic_warn;

use crate::horoscope::{HoroscopeApi, RemoteHoroscopeClient};
use crate::http::ClientSettings;
use crate::tarot::{TarotApi, TarotClient};
use crate::{ClientError, Horoscope, SavedHoroscope, TarotReading};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceCommand {
    FetchHoroscope {
        sign: String,
        category: String,
    },
    SavePrediction {
        sign: String,
        category: String,
        text: String,
    },
    ListSaved,
    DeleteSaved {
        id: String,
    },
    FetchTarot {
        sign: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceEvent {
    HoroscopeFetched(Result<Horoscope, ClientError>),
    SaveFinished(Result<(), ClientError>),
    SavedListed(Result<Vec<SavedHoroscope>, ClientError>),
    DeleteFinished(Result<(), ClientError>),
    TarotFetched(Result<TarotReading, ClientError>),
}

/// Handle to the background service thread. Commands go in over a channel;
/// completion events come back out via `try_recv`.
#[derive(Clone)]
pub struct ServiceHandle {
    cmd_tx: mpsc::Sender<ServiceCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<ServiceEvent>>>,
}

impl ServiceHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<ServiceCommand>();
        let (event_tx, event_rx) = mpsc::channel();
        let horoscope = RemoteHoroscopeClient::new(&settings)?;
        let tarot = TarotClient::new(&settings)?;

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            // Commands run strictly one at a time; each call completes (or
            // times out) before the next command is picked up.
            while let Ok(command) = cmd_rx.recv() {
                let event = runtime.block_on(handle_command(&horoscope, &tarot, command));
                if event_tx.send(event).is_err() {
                    break;
                }
            }
        });

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn submit(&self, command: ServiceCommand) {
        let _ = self.cmd_tx.send(command);
    }

    pub fn try_recv(&self) -> Option<ServiceEvent> {
        self.event_rx
            .lock()
            .ok()
            .and_then(|event_rx| event_rx.try_recv().ok())
    }
}

async fn handle_command(
    horoscope: &dyn HoroscopeApi,
    tarot: &dyn TarotApi,
    command: ServiceCommand,
) -> ServiceEvent {
    match command {
        ServiceCommand::FetchHoroscope { sign, category } => {
            let result = horoscope.fetch_horoscope(&sign, &category).await;
            warn_on_failure("horoscope fetch", &result);
            ServiceEvent::HoroscopeFetched(result)
        }
        ServiceCommand::SavePrediction {
            sign,
            category,
            text,
        } => {
            let result = horoscope.save_prediction(&sign, &category, &text).await;
            warn_on_failure("save", &result);
            ServiceEvent::SaveFinished(result)
        }
        ServiceCommand::ListSaved => {
            let result = horoscope.list_saved().await;
            warn_on_failure("saved-list fetch", &result);
            ServiceEvent::SavedListed(result)
        }
        ServiceCommand::DeleteSaved { id } => {
            let result = horoscope.delete_prediction(&id).await;
            warn_on_failure("delete", &result);
            ServiceEvent::DeleteFinished(result)
        }
        ServiceCommand::FetchTarot { sign } => {
            let result = tarot.fetch_daily_tarot(&sign).await;
            warn_on_failure("tarot fetch", &result);
            ServiceEvent::TarotFetched(result)
        }
    }
}

fn warn_on_failure<T>(operation: &str, result: &Result<T, ClientError>) {
    if let Err(err) = result {
        mystic_warn!("{} failed: {}", operation, err);
    }
}
