use crate::{AppState, CallKind, Effect, Msg, Phase, Selection};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SignSelected(sign) => {
            state.set_sign(sign);
            Vec::new()
        }
        Msg::CategorySelected(category) => {
            state.set_category(category);
            Vec::new()
        }
        Msg::FetchClicked => {
            if state.in_flight().is_some() {
                return (state, Vec::new());
            }
            let Selection { sign, category } = state.selection();
            state.begin_call(CallKind::FetchPrediction);
            vec![Effect::FetchPrediction { sign, category }]
        }
        Msg::PredictionFetched(result) => {
            state.finish_call();
            match result {
                Ok(prediction) => state.store_prediction(prediction),
                Err(message) => state.surface_error(message),
            }
            Vec::new()
        }
        Msg::SaveClicked => {
            if state.in_flight().is_some() || state.phase() != Phase::PredictionReady {
                return (state, Vec::new());
            }
            // Save what was fetched, not the possibly-diverged selection.
            let effect = state.prediction().map(|prediction| Effect::SavePrediction {
                sign: prediction.sign,
                category: prediction.category,
                text: prediction.text.clone(),
            });
            match effect {
                Some(effect) => {
                    state.begin_call(CallKind::SavePrediction);
                    vec![effect]
                }
                None => Vec::new(),
            }
        }
        Msg::SaveCompleted(result) => {
            state.finish_call();
            match result {
                Ok(()) => {
                    state.record_saved();
                    state.begin_call(CallKind::FetchSavedList);
                    vec![Effect::FetchSavedList]
                }
                Err(message) => {
                    // Failed saves leave the working prediction untouched.
                    state.surface_error(message);
                    Vec::new()
                }
            }
        }
        Msg::TarotClicked => {
            if state.in_flight().is_some() || !state.tarot_enabled() {
                return (state, Vec::new());
            }
            let sign = state.selection().sign;
            state.begin_call(CallKind::FetchTarot);
            vec![Effect::FetchTarot { sign }]
        }
        Msg::TarotFetched(result) => {
            state.finish_call();
            match result {
                Ok(reading) => state.store_tarot(reading),
                // A failed fetch leaves the previous reading in place.
                Err(message) => state.surface_error(message),
            }
            Vec::new()
        }
        Msg::SavedViewOpened => {
            if state.in_flight().is_some() {
                return (state, Vec::new());
            }
            state.begin_call(CallKind::FetchSavedList);
            vec![Effect::FetchSavedList]
        }
        Msg::SavedListFetched(result) => {
            state.finish_call();
            match result {
                Ok(saved) => state.store_saved_list(saved),
                Err(message) => state.surface_error(message),
            }
            Vec::new()
        }
        Msg::DeleteClicked { id } => {
            if state.in_flight().is_some() {
                return (state, Vec::new());
            }
            state.begin_call(CallKind::DeleteSaved);
            vec![Effect::DeleteSaved { id }]
        }
        Msg::DeleteCompleted(result) => {
            state.finish_call();
            match result {
                Ok(()) => {
                    // No optimistic removal; the list only changes via re-fetch.
                    state.mark_saved_stale();
                    state.begin_call(CallKind::FetchSavedList);
                    vec![Effect::FetchSavedList]
                }
                Err(message) => {
                    state.surface_error(message);
                    Vec::new()
                }
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
