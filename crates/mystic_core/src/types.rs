use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZodiacSign {
    #[default]
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|sign| sign.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    Love,
    Career,
    Health,
    SocialLife,
    Mind,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Love,
        Category::Career,
        Category::Health,
        Category::SocialLife,
        Category::Mind,
    ];

    /// Wire-level name, as the remote service expects it.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Love => "love",
            Category::Career => "career",
            Category::Health => "health",
            Category::SocialLife => "social life",
            Category::Mind => "mind",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single cursor driving all fetches. Always holds a valid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub sign: ZodiacSign,
    pub category: Category,
}

/// A horoscope result not yet persisted by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub sign: ZodiacSign,
    pub category: Category,
    pub text: String,
    pub lucky_number: Option<u32>,
    pub date: Option<String>,
}

/// A prediction persisted by the remote service.
///
/// Sign and category stay as plain strings: the list is service-owned and
/// may carry records outside the client vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedPrediction {
    pub id: String,
    pub sign: String,
    pub category: String,
    pub text: String,
    pub saved_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TarotCard {
    pub name: String,
    pub meaning_upright: String,
}

/// A set of drawn cards plus narrative text for a sign. Replaced wholesale
/// by the next fetch, never merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TarotReading {
    pub sign: String,
    pub cards: Vec<TarotCard>,
    pub reading: String,
}
