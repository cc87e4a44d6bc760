#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub display_date: String,
    pub location: String,
    pub target_audience: String,
    pub category: String,
    pub mode: Mode,
    pub price: Price,
}

impl Event {
    pub fn new(
        id: String,
        name: String,
        display_date: String,
        location: String,
        target_audience: String,
        category: String,
        mode: Mode,
        price: Price,
    ) -> Self {
        Self {
            id,
            name,
            display_date,
            location,
            target_audience,
            category,
            mode,
            price,
        }
    }
}

/// How the event is attended, as the backoffice stores it
#[derive(strum::Display, strum::EnumString, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Presencial,
    Online,
    #[strum(serialize = "Híbrido")]
    Hibrido,
}

#[derive(strum::Display, strum::EnumString, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Price {
    Gratuito,
    Pago,
    #[strum(serialize = "A confirmar")]
    AConfirmar,
}
