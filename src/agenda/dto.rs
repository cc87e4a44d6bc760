use super::model::{Event, Mode, Price};
use serde::{de, Deserialize, Deserializer};
use serde_either::SingleOrVec;
use serde_json::Value;
use std::str::FromStr;
use tracing::warn;

// Note: some String fields need the custom deserializer because the
// backoffice leaves them blank and the store returns them as null
#[derive(Debug, Deserialize)]
pub struct EventRow {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "data", deserialize_with = "deserialize_str")]
    pub display_date: String,
    #[serde(rename = "local", deserialize_with = "deserialize_str")]
    pub location: String,
    #[serde(rename = "publico_alvo")]
    pub target_audience: SingleOrVec<String>,
    #[serde(rename = "categoria", deserialize_with = "deserialize_str")]
    pub category: String,
    #[serde(rename = "modalidade", deserialize_with = "deserialize_str")]
    pub mode: String,
    #[serde(rename = "preco", deserialize_with = "deserialize_str")]
    pub price: String,
}

impl EventRow {
    pub fn to_model(&self) -> Event {
        let target_audience = match self.target_audience.clone() {
            SingleOrVec::Single(audience) => audience,
            SingleOrVec::Vec(vec) => vec.join(", "),
        };

        Event::new(
            self.id.to_string(),
            self.name.to_string(),
            self.display_date.to_string(),
            self.location.to_string(),
            target_audience,
            self.category.to_string(),
            Self::parse_mode(&self.mode),
            Self::parse_price(&self.price),
        )
    }

    fn parse_mode(raw: &str) -> Mode {
        Mode::from_str(raw).unwrap_or_else(|_| {
            warn!("Unknown modalidade '{}' (assuming Presencial)", raw);
            Mode::Presencial
        })
    }

    fn parse_price(raw: &str) -> Price {
        Price::from_str(raw).unwrap_or_else(|_| {
            warn!("Unknown preco '{}' (assuming A confirmar)", raw);
            Price::AConfirmar
        })
    }
}

fn deserialize_str<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s.parse().map_err(de::Error::custom)?,
        _ => String::new(),
    })
}

// The store's numeric primary keys and the CMS's string slugs both end up
// as the event id, so both JSON types are accepted
fn deserialize_id<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(d)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        unknown => Err(de::Error::custom(format!(
            "id is neither a string nor a number: {}",
            unknown
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn should_deserialize_a_full_row() {
        let rows = serde_json::from_str::<Vec<EventRow>>(
            r##"
              [{
                "id": 42,
                "nome": "Imersão Ecommerce 2026",
                "data": "20 a 22 de março de 2026",
                "local": "São Paulo - SP",
                "publico_alvo": ["Lojistas", "Agências"],
                "categoria": "Ecommerce",
                "modalidade": "Presencial",
                "preco": "Pago",
                "criado_em": "2026-01-05T11:32:00Z"
              }]"##,
        );

        assert!(rows.is_ok(), "{:?}", rows);

        let rows = rows.unwrap();

        assert_eq!(rows.len(), 1);

        let event = rows.first().unwrap().to_model();

        assert_eq!(event.id, "42");
        assert_eq!(event.target_audience, "Lojistas, Agências");
        assert_eq!(event.mode, Mode::Presencial);
        assert_eq!(event.price, Price::Pago);
    }

    #[test_log::test]
    fn should_deserialize_a_row_with_blank_fields() {
        let rows = serde_json::from_str::<Vec<EventRow>>(
            r##"
              [{
                "id": "workshop-erp",
                "nome": "Workshop ERP",
                "data": null,
                "local": null,
                "publico_alvo": "Indústrias",
                "categoria": null,
                "modalidade": "Online",
                "preco": "Gratuito"
              }]"##,
        );

        assert!(rows.is_ok(), "{:?}", rows);

        let event = rows.unwrap().first().unwrap().to_model();

        assert_eq!(event.id, "workshop-erp");
        assert_eq!(event.display_date, "");
        assert_eq!(event.location, "");
        assert_eq!(event.category, "");
        assert_eq!(event.mode, Mode::Online);
    }

    #[test_log::test]
    fn when_modalidade_is_unknown_should_fall_back_to_presencial() {
        let row = serde_json::from_str::<EventRow>(
            r##"
              {
                "id": 7,
                "nome": "Feira de ERP",
                "data": "10/08/2026",
                "local": "Belo Horizonte - MG",
                "publico_alvo": "Varejistas",
                "categoria": "ERP",
                "modalidade": "Metaverso",
                "preco": "A confirmar"
              }"##,
        )
        .unwrap();

        let event = row.to_model();

        assert_eq!(event.mode, Mode::Presencial);
        assert_eq!(event.price, Price::AConfirmar);
    }

    #[test_log::test]
    fn should_accept_accented_wire_values() {
        let row = serde_json::from_str::<EventRow>(
            r##"
              {
                "id": 8,
                "nome": "Semana do Varejo Digital",
                "data": "2026-09-14",
                "local": "Curitiba - PR",
                "publico_alvo": "Lojistas",
                "categoria": "Ecommerce",
                "modalidade": "Híbrido",
                "preco": "Gratuito"
              }"##,
        )
        .unwrap();

        assert_eq!(row.to_model().mode, Mode::Hibrido);
    }
}
