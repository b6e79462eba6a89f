use crate::events::model::Event;
use itertools::Itertools;

// Literal markup matching the teaching page's styling; changing any byte
// here changes the rendered page.
const NO_EVENTS_PLACEHOLDER: &str = r#"        <p style="color: var(--color-text-light);">No upcoming events scheduled. Check back soon or <a href="http://eepurl.com/gOSn91" target="_blank" rel="noopener">join the mailing list</a> for updates.</p>"#;

/// Renders the event list to the HTML fragment spliced into the teaching
/// page. Pure: same events in, same fragment out.
pub fn render_events(events: &[Event]) -> String {
    if events.is_empty() {
        return NO_EVENTS_PLACEHOLDER.to_string();
    }

    let mut html_parts = vec![r#"        <div class="services-list">"#.to_string()];

    for event in events {
        let date_location = [event.date.as_str(), event.location.as_str()]
            .iter()
            .filter(|part| !part.is_empty())
            .join(" · ");

        html_parts.push(format!(
            "          <div style=\"padding: 1rem 0; border-bottom: 1px solid var(--color-border);\">\n            <strong>{}</strong><br>\n            <span style=\"color: var(--color-text-light);\">{}</span><br>\n            <a href=\"{}\" target=\"_blank\" rel=\"noopener\">Register →</a>\n          </div>",
            event.title, date_location, event.url
        ));
    }

    html_parts.push("        </div>".to_string());

    html_parts.join("\n")
}
