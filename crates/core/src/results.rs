use url::form_urlencoded;

use crate::models::{Family, FamilyDetails, ResultRecord};
use crate::tables::{templates_for, QUERY_PLACEHOLDER};

const IMAGE_PLACEHOLDER_BASE: &str = "https://placehold.co/400x250?text=";
const WEB_SEARCH_BASE: &str = "https://www.google.com/search?q=";

/// One card per platform template of `family`, in table order.
pub fn build_results_for_family(query: &str, family: Family) -> Vec<ResultRecord> {
    let encoded = encode_query(query);
    let title = title_case(query);

    templates_for(family)
        .iter()
        .enumerate()
        .map(|(idx, template)| ResultRecord {
            id: format!("{}-{}", family.key(), idx + 1),
            record_type: family.record_type().to_string(),
            name: format!("{} — {} results", title, template.name),
            image: placeholder_image(template.name),
            platform: template.name.to_string(),
            platform_url: template.url_template.replace(QUERY_PLACEHOLDER, &encoded),
            details: Some(FamilyDetails::placeholder(family)),
        })
        .collect()
}

/// String-keyed entry point; an unrecognized key yields no records.
pub fn build_results_for_key(query: &str, family_key: &str) -> Vec<ResultRecord> {
    Family::from_key(family_key)
        .map(|family| build_results_for_family(query, family))
        .unwrap_or_default()
}

/// Generic web-search card used when no intent was recognized.
pub fn web_fallback_record(query: &str) -> ResultRecord {
    ResultRecord {
        id: "fallback-1".to_string(),
        record_type: "web".to_string(),
        name: format!("Search Google for '{query}'"),
        image: placeholder_image("Google"),
        platform: "Google".to_string(),
        platform_url: format!("{WEB_SEARCH_BASE}{}", encode_query(query)),
        details: None,
    }
}

/// Form-urlencodes `query`: spaces become `+`, reserved bytes are escaped.
pub fn encode_query(query: &str) -> String {
    form_urlencoded::byte_serialize(query.as_bytes()).collect()
}

/// Uppercases a cased char that follows an uncased one and lowercases the
/// rest, so "chicken biriyani" reads "Chicken Biriyani".
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut previous_cased = false;

    for ch in input.chars() {
        let cased = ch.is_lowercase() || ch.is_uppercase();
        if cased && previous_cased {
            out.extend(ch.to_lowercase());
        } else if cased {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        previous_cased = cased;
    }

    out
}

fn placeholder_image(platform: &str) -> String {
    format!("{IMAGE_PLACEHOLDER_BASE}{}", encode_query(platform))
}
