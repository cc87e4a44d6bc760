use super::{dto::EventRow, model::Event};
use futures::future;
use lazy_static::lazy_static;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::RetryTransientMiddleware;
use tracing::{error, info};

const EVENTS_TABLE: &str = "eventos";
const MAX_RETRIES: u32 = 5;

lazy_static! {
    static ref REST_CLIENT: ClientWithMiddleware = ClientBuilder::new(Client::new())
        .with(RetryTransientMiddleware::new_with_policy(
            ExponentialBackoff::builder().build_with_max_retries(MAX_RETRIES)
        ))
        .build();
}

pub struct AgendaAPI {
    base_url: String,
}

impl AgendaAPI {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    /**
    Returns events in storage order; sorting is the showcase's job
    * event_limit: None will retrieve everything
    */
    #[tracing::instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn get_events(
        &self,
        category: Option<&str>,
        event_limit: Option<i32>,
    ) -> Result<Vec<Event>, APIError> {
        match event_limit {
            None => {
                info!("Getting all events");
            }
            Some(limit) => {
                info!("Getting {} events", limit);
            }
        }

        let mut url = format!("{}/{}?select=*", self.base_url, EVENTS_TABLE);

        if let Some(category) = category {
            url.push_str(&format!("&categoria=eq.{}", category));
        }
        if let Some(limit) = event_limit {
            url.push_str(&format!("&limit={}", limit));
        }

        let json_response = REST_CLIENT
            .get(url)
            .send()
            .await
            .expect("Error sending request")
            .error_for_status()
            .expect("Request failed")
            .text()
            .await
            .expect("Received invalid response");
        let parsed_response = serde_json::from_str::<Vec<EventRow>>(&json_response);

        match parsed_response {
            Ok(parsed_response) => Ok(parsed_response.iter().map(|row| row.to_model()).collect()),
            Err(e) => {
                error!("Response parse failed: {:?}", e);
                Err(APIError::InvalidResponse)
            }
        }
    }

    /**
    Fetches every category concurrently, flattening in the given order
    */
    pub async fn get_events_for_categories(
        &self,
        categories: &[&str],
        event_limit: Option<i32>,
    ) -> Result<Vec<Event>, APIError> {
        let responses = future::join_all(
            categories
                .iter()
                .map(|&category| self.get_events(Some(category), event_limit)),
        )
        .await;

        let mut events = Vec::new();

        for response in responses {
            events.append(&mut response?);
        }

        Ok(events)
    }
}

#[derive(Debug)]
pub enum APIError {
    InvalidResponse,
}
