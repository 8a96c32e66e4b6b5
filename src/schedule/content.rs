//! Display text for show blocks and popovers: title/host splitting, entity
//! decoding, and fallbacks for absent fields.
//!
//! Everything here returns plain data fields; the renderer only ever draws
//! them as text, so markup smuggled into the feed is never interpreted.

use crate::api::format_clock;
use crate::config::ClockFormat;

use super::week::Show;

/// Substituted when the feed carries no description for a show.
pub const NO_DESCRIPTION: &str = "No description available";

const HOSTED_BY: &str = "hosted by";

/// Display-ready text for one show block and its popover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowContent {
    pub title: String,
    pub host: Option<String>,
    pub time_range: String,
    pub description: String,
}

impl ShowContent {
    pub fn from_show(show: &Show, clock_format: ClockFormat) -> Self {
        let name = decode_entities(&show.name);
        let (title, host) = split_hosted_by(&name);

        let description = show
            .description
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(decode_entities)
            .unwrap_or_else(|| NO_DESCRIPTION.to_string());

        let time_range = format!(
            "{} - {}",
            format_clock(show.start.time(), clock_format),
            format_clock(show.end.time(), clock_format)
        );

        Self {
            title,
            host,
            time_range,
            description,
        }
    }
}

/// Split a show name on the first case-insensitive "hosted by", discarding
/// the delimiter and trimming both halves. Names without the pattern are
/// all title.
pub fn split_hosted_by(name: &str) -> (String, Option<String>) {
    match find_ignore_ascii_case(name, HOSTED_BY) {
        Some(index) => {
            let title = name[..index].trim().to_string();
            let host = name[index + HOSTED_BY.len()..].trim();
            let host = (!host.is_empty()).then(|| host.to_string());
            (title, host)
        }
        None => (name.trim().to_string(), None),
    }
}

/// Decode HTML entities the feed embeds in names and descriptions. The
/// result is plain text, handed to the renderer as-is.
pub fn decode_entities(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

// Byte-wise scan is enough here: the needle is pure ASCII, so a match can
// only start at a character boundary.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("Jane Doe hosted by DJ Spin", "Jane Doe", Some("DJ Spin"); "plain")]
    #[test_case("Open Decks HOSTED BY The Crew", "Open Decks", Some("The Crew"); "uppercase delimiter")]
    #[test_case("Drift Hosted By  K.", "Drift", Some("K."); "mixed case, extra spaces")]
    #[test_case("Just A Show", "Just A Show", None; "no delimiter")]
    #[test_case("Signals hosted by", "Signals", None; "trailing delimiter, no host")]
    fn splits_on_the_first_case_insensitive_delimiter(
        name: &str,
        title: &str,
        host: Option<&str>,
    ) {
        let (got_title, got_host) = split_hosted_by(name);
        assert_eq!(got_title, title);
        assert_eq!(got_host.as_deref(), host);
    }

    #[test]
    fn only_the_first_occurrence_splits() {
        let (title, host) = split_hosted_by("A hosted by B hosted by C");
        assert_eq!(title, "A");
        assert_eq!(host.as_deref(), Some("B hosted by C"));
    }

    #[test]
    fn entities_decode_to_plain_text() {
        assert_eq!(decode_entities("Drum &amp; Bass"), "Drum & Bass");
        assert_eq!(decode_entities("8&#8211;10"), "8\u{2013}10");
        // Markup survives only as inert text.
        assert_eq!(
            decode_entities("&lt;b&gt;loud&lt;/b&gt;"),
            "<b>loud</b>"
        );
    }

    fn show(name: &str, description: Option<&str>) -> Show {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Show {
            name: name.to_string(),
            description: description.map(String::from),
            start: date.and_hms_opt(8, 0, 0).unwrap(),
            end: date.and_hms_opt(9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn content_carries_split_name_and_time_range() {
        let content = ShowContent::from_show(
            &show("Jane Doe hosted by DJ Spin", Some("Music &amp; chat")),
            ClockFormat::Hour24,
        );
        assert_eq!(content.title, "Jane Doe");
        assert_eq!(content.host.as_deref(), Some("DJ Spin"));
        assert_eq!(content.time_range, "08:00 - 09:30");
        assert_eq!(content.description, "Music & chat");
    }

    #[test]
    fn missing_or_blank_description_gets_the_placeholder() {
        let none = ShowContent::from_show(&show("A", None), ClockFormat::Hour24);
        assert_eq!(none.description, NO_DESCRIPTION);

        let blank = ShowContent::from_show(&show("A", Some("   ")), ClockFormat::Hour24);
        assert_eq!(blank.description, NO_DESCRIPTION);
    }
}
