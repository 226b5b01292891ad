//! Mystic core: pure session state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod types;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, CallKind, Phase};
pub use types::{
    Category, Prediction, SavedPrediction, Selection, TarotCard, TarotReading, ZodiacSign,
};
pub use update::update;
pub use view_model::AppViewModel;
