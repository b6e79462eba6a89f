use crate::events::model::Event;

const LOCATION: &str = "Esalen Institute, Big Sur";

/// Candidate extracted from a workshop anchor on the faculty page.
///
/// All fields default to empty text when the markup doesn't provide them;
/// `to_model` decides whether the candidate is a real event.
#[derive(Debug, Default)]
pub struct WorkshopLink {
    pub title: String,
    pub href: String,
    pub date: String,
}

impl WorkshopLink {
    /// Converts to an [`Event`], or `None` for name-only links (empty title
    /// or a title that is just the teacher's name).
    pub fn to_model(&self, base_url: &str) -> Option<Event> {
        if self.title.is_empty() || self.title.to_lowercase().contains("dan") {
            return None;
        }

        let url = if self.href.starts_with("http") {
            self.href.clone()
        } else {
            format!("{}{}", base_url, self.href)
        };

        Some(Event {
            title: self.title.clone(),
            date: self.date.clone(),
            location: LOCATION.to_string(),
            url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn should_absolutize_relative_workshop_links() {
        let link = WorkshopLink {
            title: "Mindful Eating Retreat".to_string(),
            href: "/workshops/mindful-eating".to_string(),
            date: "May 1–4, 2025".to_string(),
        };

        let event = link.to_model("https://www.esalen.org").unwrap();

        assert_eq!(event.url, "https://www.esalen.org/workshops/mindful-eating");
        assert_eq!(event.location, "Esalen Institute, Big Sur");
    }

    #[test_log::test]
    fn should_keep_absolute_workshop_links() {
        let link = WorkshopLink {
            title: "Zen Weekend".to_string(),
            href: "https://www.esalen.org/workshops/zen-weekend".to_string(),
            date: String::new(),
        };

        let event = link.to_model("https://www.esalen.org").unwrap();

        assert_eq!(event.url, "https://www.esalen.org/workshops/zen-weekend");
        assert_eq!(event.date, "");
    }

    #[test_log::test]
    fn should_skip_name_only_links() {
        let link = WorkshopLink {
            title: "Dan Zigmond".to_string(),
            href: "/workshops/some-retreat".to_string(),
            date: String::new(),
        };

        assert!(link.to_model("https://www.esalen.org").is_none());
    }

    #[test_log::test]
    fn should_skip_links_without_a_title() {
        let link = WorkshopLink {
            href: "/workshops/some-retreat".to_string(),
            ..Default::default()
        };

        assert!(link.to_model("https://www.esalen.org").is_none());
    }
}
