use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use mystic_client::{
    ClientError, ClientSettings, Horoscope, SavedHoroscope, ServiceCommand, ServiceEvent,
    ServiceHandle,
};
use mystic_core::{
    Category, Effect, Msg, Prediction, SavedPrediction, TarotCard, TarotReading, ZodiacSign,
};

use crate::app::Event;

/// Forwards state-machine effects to the service thread and pumps service
/// events back into the main loop as core messages.
pub struct EffectRunner {
    service: ServiceHandle,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings, event_tx: mpsc::Sender<Event>) -> Result<Self, ClientError> {
        let service = ServiceHandle::new(settings)?;
        let runner = Self { service };
        runner.spawn_event_loop(event_tx);
        Ok(runner)
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPrediction { sign, category } => {
                    self.service.submit(ServiceCommand::FetchHoroscope {
                        sign: sign.as_str().to_string(),
                        category: category.as_str().to_string(),
                    });
                }
                Effect::SavePrediction {
                    sign,
                    category,
                    text,
                } => {
                    self.service.submit(ServiceCommand::SavePrediction {
                        sign: sign.as_str().to_string(),
                        category: category.as_str().to_string(),
                        text,
                    });
                }
                Effect::FetchSavedList => {
                    self.service.submit(ServiceCommand::ListSaved);
                }
                Effect::DeleteSaved { id } => {
                    self.service.submit(ServiceCommand::DeleteSaved { id });
                }
                Effect::FetchTarot { sign } => {
                    self.service.submit(ServiceCommand::FetchTarot {
                        sign: sign.as_str().to_string(),
                    });
                }
            }
        }
    }

    fn spawn_event_loop(&self, event_tx: mpsc::Sender<Event>) {
        let service = self.service.clone();
        thread::spawn(move || loop {
            if let Some(event) = service.try_recv() {
                if event_tx.send(Event::Core(map_event(event))).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_event(event: ServiceEvent) -> Msg {
    match event {
        ServiceEvent::HoroscopeFetched(result) => {
            Msg::PredictionFetched(result.map(map_horoscope).map_err(display))
        }
        ServiceEvent::SaveFinished(result) => Msg::SaveCompleted(result.map_err(display)),
        ServiceEvent::SavedListed(result) => Msg::SavedListFetched(
            result
                .map(|entries| entries.into_iter().map(map_saved).collect())
                .map_err(display),
        ),
        ServiceEvent::DeleteFinished(result) => Msg::DeleteCompleted(result.map_err(display)),
        ServiceEvent::TarotFetched(result) => {
            Msg::TarotFetched(result.map(map_tarot).map_err(display))
        }
    }
}

fn display(err: ClientError) -> String {
    err.to_string()
}

fn map_horoscope(horoscope: Horoscope) -> Prediction {
    Prediction {
        // The service echoes what was requested; fall back to the defaults
        // if it answers with something outside the client vocabulary.
        sign: ZodiacSign::from_name(&horoscope.sign).unwrap_or_default(),
        category: Category::from_name(&horoscope.category).unwrap_or_default(),
        text: horoscope.text,
        lucky_number: Some(horoscope.lucky_number),
        date: Some(horoscope.date),
    }
}

fn map_saved(entry: SavedHoroscope) -> SavedPrediction {
    SavedPrediction {
        id: entry.id,
        sign: entry.sign,
        category: entry.category,
        text: entry.text,
        saved_at: entry.saved_at,
    }
}

fn map_tarot(reading: mystic_client::TarotReading) -> TarotReading {
    TarotReading {
        sign: reading.sign,
        cards: reading
            .cards
            .into_iter()
            .map(|card| TarotCard {
                name: card.name,
                meaning_upright: card.meaning_upright,
            })
            .collect(),
        reading: reading.reading,
    }
}
