use mystic_core::{AppViewModel, CallKind, Phase};

use crate::app::Screen;

pub fn render(view: &AppViewModel, screen: Screen) {
    println!();
    println!("==============================================");
    println!(" Mystic Horoscope Reader");
    println!("==============================================");

    match screen {
        Screen::Reading => render_reading(view),
        Screen::Saved => render_saved(view),
    }

    if let Some(message) = &view.error {
        println!();
        println!("Error: {message}");
    }

    println!();
    match view.in_flight {
        Some(call) => println!("{}", busy_label(call)),
        None => println!("{}", prompt_line(view, screen)),
    }
}

pub fn render_help() {
    println!();
    println!("Commands:");
    println!("  sign <name|1-12>      pick a zodiac sign");
    println!("  category <name|1-5>   pick a category");
    println!("  get                   fetch a horoscope for the selection");
    println!("  save                  persist the fetched prediction");
    println!("  tarot                 draw a daily tarot reading");
    println!("  saved                 open (and refresh) the saved list");
    println!("  delete <id>           delete a saved prediction");
    println!("  back                  return to the reading view");
    println!("  help, quit");
}

pub fn render_unknown(line: &str) {
    println!("Unrecognized command: {line}. Type 'help' for commands.");
}

fn render_reading(view: &AppViewModel) {
    println!(
        "Sign: {} | Category: {}",
        view.selection.sign,
        capitalize(view.selection.category.as_str())
    );

    match (&view.prediction, view.phase) {
        (Some(prediction), _) => {
            println!();
            println!(
                "{} - {}",
                prediction.sign,
                capitalize(prediction.category.as_str())
            );
            println!("{}", prediction.text);
            let metrics: Vec<String> = [
                prediction
                    .lucky_number
                    .map(|number| format!("Lucky Number: {number}")),
                prediction.date.as_ref().map(|date| format!("Date: {date}")),
            ]
            .into_iter()
            .flatten()
            .collect();
            if !metrics.is_empty() {
                println!("{}", metrics.join(" | "));
            }
        }
        (None, Phase::PredictionSaved) => {
            println!();
            println!("Prediction saved permanently!");
        }
        (None, _) => {
            println!();
            println!("No prediction yet. Type 'get' to fetch one.");
        }
    }

    if let Some(tarot) = &view.tarot {
        println!();
        println!("Daily tarot for {}:", tarot.sign);
        for card in &tarot.cards {
            if card.meaning_upright.is_empty() {
                println!("  * {}", card.name);
            } else {
                println!("  * {}: {}", card.name, card.meaning_upright);
            }
        }
        if !tarot.reading.is_empty() {
            println!("{}", tarot.reading);
        }
    }
}

fn render_saved(view: &AppViewModel) {
    if view.saved.is_empty() {
        println!("No saved predictions yet. Get a prediction and save it!");
    } else {
        println!("Total Saved Predictions: {}", view.saved.len());
        for entry in &view.saved {
            println!();
            println!("[{}] {} - {}", entry.id, entry.sign, capitalize(&entry.category));
            println!("    {}", entry.text);
            if let Some(saved_at) = &entry.saved_at {
                println!("    Saved on: {saved_at}");
            }
        }
    }

    if view.saved_stale {
        println!();
        println!("(list out of date; type 'saved' to refresh)");
    }
}

fn busy_label(call: CallKind) -> &'static str {
    match call {
        CallKind::FetchPrediction => "Fetching your horoscope...",
        CallKind::SavePrediction => "Saving prediction...",
        CallKind::FetchSavedList => "Loading saved predictions...",
        CallKind::DeleteSaved => "Deleting prediction...",
        CallKind::FetchTarot => "Drawing your tarot cards...",
    }
}

fn prompt_line(view: &AppViewModel, screen: Screen) -> String {
    let mut commands: Vec<&str> = match screen {
        Screen::Reading => vec!["sign <name>", "category <name>", "get"],
        Screen::Saved => vec!["delete <id>", "refresh", "back"],
    };
    if screen == Screen::Reading {
        if view.phase == Phase::PredictionReady {
            commands.push("save");
        }
        if view.tarot_enabled {
            commands.push("tarot");
        }
        commands.push("saved");
    }
    commands.push("help");
    commands.push("quit");
    format!("> {}", commands.join(" | "))
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
