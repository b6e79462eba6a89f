use super::dto::WorkshopLink;
use crate::events::model::Event;
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::error::Error;
use std::time::Duration;
use tracing::error;

const ESALEN_BASE_URL: &str = "https://www.esalen.org";
const FACULTY_PAGE_PATH: &str = "/faculty/dan-zigmond";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

lazy_static! {
    static ref HTTP_CLIENT: Client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("Failed to build HTTP client");
    static ref WORKSHOP_LINK_SELECTOR: Selector =
        Selector::parse(r#"a[href*="/workshops/"]"#).expect("Invalid workshop link selector");
    // e.g. "May 1–4, 2025" or "June 2-5 2025", matched inside the link's container
    static ref DATE_RANGE: Regex =
        Regex::new(r"(\w+ \d+[–-]\d+,? \d{4})").expect("Invalid date regex");
}

pub struct EsalenAPI;

impl EsalenAPI {
    /// Scrapes upcoming workshops from the Esalen faculty page.
    ///
    /// Best-effort: any transport, status or parse problem is logged and
    /// yields no events rather than an error.
    #[tracing::instrument]
    pub async fn get_events() -> Vec<Event> {
        Self::get_events_from(ESALEN_BASE_URL).await
    }

    pub async fn get_events_from(base_url: &str) -> Vec<Event> {
        match Self::fetch_faculty_page(base_url).await {
            Ok(html) => Self::extract_events(&html, base_url),
            Err(e) => {
                error!("Error fetching Esalen events: {}", e);
                Vec::new()
            }
        }
    }

    async fn fetch_faculty_page(base_url: &str) -> Result<String, Box<dyn Error>> {
        let html = HTTP_CLIENT
            .get(format!("{}{}", base_url, FACULTY_PAGE_PATH))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(html)
    }

    fn extract_events(html: &str, base_url: &str) -> Vec<Event> {
        let document = Html::parse_document(html);

        document
            .select(&WORKSHOP_LINK_SELECTOR)
            .filter_map(|link| {
                let href = link.value().attr("href")?.to_string();
                let title = link.text().collect::<String>().trim().to_string();
                let date = Self::find_nearby_date(link).unwrap_or_default();

                WorkshopLink { title, href, date }.to_model(base_url)
            })
            .collect()
    }

    /// Looks for a date pattern in the text of the link's nearest
    /// `div`/`li`/`article` ancestor.
    fn find_nearby_date(link: ElementRef) -> Option<String> {
        let container = link
            .ancestors()
            .filter_map(ElementRef::wrap)
            .find(|el| matches!(el.value().name(), "div" | "li" | "article"))?;
        let text = container.text().collect::<String>();

        DATE_RANGE.captures(&text).map(|c| c[1].to_string())
    }
}
