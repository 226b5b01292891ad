use mystic_core::{Category, Msg, ZodiacSign};

use crate::app::Event;

/// Parses one line of user input. Returns `None` for blank lines.
pub fn parse(line: &str) -> Option<Event> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let event = match command.to_ascii_lowercase().as_str() {
        "sign" => match pick_sign(rest) {
            Some(sign) => Event::Core(Msg::SignSelected(sign)),
            None => Event::Unknown(line.to_string()),
        },
        "category" | "cat" => match pick_category(rest) {
            Some(category) => Event::Core(Msg::CategorySelected(category)),
            None => Event::Unknown(line.to_string()),
        },
        "get" | "fetch" => Event::Core(Msg::FetchClicked),
        "save" => Event::Core(Msg::SaveClicked),
        "tarot" => Event::Core(Msg::TarotClicked),
        "delete" | "del" if !rest.is_empty() => Event::Core(Msg::DeleteClicked {
            id: rest.to_string(),
        }),
        "saved" | "list" | "refresh" => Event::OpenSaved,
        "back" | "reading" => Event::OpenReading,
        "help" | "?" => Event::Help,
        "quit" | "exit" | "q" => Event::Quit,
        _ => Event::Unknown(line.to_string()),
    };
    Some(event)
}

/// Signs can be picked by name or by their 1-based menu number.
fn pick_sign(value: &str) -> Option<ZodiacSign> {
    if let Ok(index) = value.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|index| ZodiacSign::ALL.get(index))
            .copied();
    }
    ZodiacSign::from_name(value)
}

fn pick_category(value: &str) -> Option<Category> {
    if let Ok(index) = value.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|index| Category::ALL.get(index))
            .copied();
    }
    Category::from_name(value)
}
