use crate::{Category, ZodiacSign};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchPrediction {
        sign: ZodiacSign,
        category: Category,
    },
    SavePrediction {
        sign: ZodiacSign,
        category: Category,
        text: String,
    },
    FetchSavedList,
    DeleteSaved {
        id: String,
    },
    FetchTarot {
        sign: ZodiacSign,
    },
}
