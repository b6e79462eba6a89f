use crate::events::model::Event;
use serde::{de, Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

pub(crate) const LOCATION: &str =
    "SF Dharma Collective, San Francisco · Hybrid (in-person and online)";
pub(crate) const FALLBACK_EVENTS_PATH: &str = "/upcoming-events";

const DEFAULT_TITLE: &str = "Event with Dan Zigmond";

/// Gatsby page-data payload. Only `result.data` sections shaped like query
/// results (objects with an `edges` array) are kept; anything else is
/// dropped during deserialization instead of failing.
#[derive(Debug, Deserialize, Default)]
pub struct PageData {
    #[serde(default)]
    pub result: PageDataResult,
}

#[derive(Debug, Deserialize, Default)]
pub struct PageDataResult {
    #[serde(default, deserialize_with = "deserialize_sections")]
    pub data: BTreeMap<String, PageDataSection>,
}

#[derive(Debug, Deserialize, Default)]
pub struct PageDataSection {
    #[serde(default)]
    pub edges: Vec<ResponseEdge>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ResponseEdge {
    #[serde(default)]
    pub node: Value,
}

// Note: the String fields need the custom deserializer due to being optional
#[derive(Debug, Deserialize, Default)]
pub struct ResponseNode {
    #[serde(default, deserialize_with = "deserialize_str")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub url: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub slug: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub date: String,
    #[serde(rename = "startDate", default, deserialize_with = "deserialize_str")]
    pub start_date: String,
}

impl ResponseNode {
    pub fn to_model(&self, base_url: &str) -> Event {
        let title = [&self.title, &self.name]
            .into_iter()
            .find(|s| !s.is_empty())
            .cloned()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        let url = match [&self.url, &self.slug].into_iter().find(|s| !s.is_empty()) {
            Some(link) if link.starts_with("http") => link.clone(),
            Some(link) => format!("{}{}", base_url, link),
            None => format!("{}{}", base_url, FALLBACK_EVENTS_PATH),
        };

        // SFDC events are always at 7pm
        let date = [&self.date, &self.start_date]
            .into_iter()
            .find(|s| !s.is_empty())
            .map(|date| format!("{}, 7pm", date))
            .unwrap_or_default();

        Event {
            title,
            date,
            location: LOCATION.to_string(),
            url,
        }
    }
}

fn deserialize_sections<'de, D>(d: D) -> Result<BTreeMap<String, PageDataSection>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(d)?;
    Ok(match value {
        Value::Object(map) => map
            .into_iter()
            .filter_map(|(name, section)| {
                serde_json::from_value(section)
                    .ok()
                    .map(|section| (name, section))
            })
            .collect(),
        _ => BTreeMap::new(),
    })
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
