use crate::intent::detect_intent;
use crate::models::{AgentReply, Family, Intent};
use crate::results::{build_results_for_family, web_fallback_record};
use crate::tables::KNOWN_NAMES;

pub const EMPTY_QUERY_REPLY: &str = "Please type a query.";

/// Runs one query through classification and card building.
///
/// Blank input short-circuits before classification. The trimmed text, with
/// its original casing, is what gets echoed and substituted into links.
pub fn compose_reply(input: &str) -> AgentReply {
    let text = input.trim();
    if text.is_empty() {
        return AgentReply::new(EMPTY_QUERY_REPLY, Vec::new());
    }

    let classification = detect_intent(text);
    let reply = match (classification.intent, classification.family) {
        (Intent::Greeting, _) => AgentReply::new(greeting_reply(text), Vec::new()),
        (_, Some(family)) => AgentReply::new(
            family_reply(family),
            build_results_for_family(text, family),
        ),
        _ => AgentReply::new(
            format!("Sorry, I couldn't detect a specific intent. I searched web for '{text}'."),
            vec![web_fallback_record(text)],
        ),
    };

    reply.with_classification(classification)
}

pub fn family_reply(family: Family) -> &'static str {
    match family {
        Family::Restaurants => "Here are search results for restaurants matching your query.",
        Family::Hotels => "Here are hotels matching your query.",
        Family::Flights => "Here are flight search pages for your query.",
        Family::Trains => "Train search pages for your query.",
        Family::Events => "Events & tickets search results.",
        Family::Products => "Product search results across marketplaces.",
        Family::Taxi => "Taxi / ride options and search pages.",
        Family::Temple => "Places of worship (open in Google Maps).",
    }
}

pub fn greeting_reply(text: &str) -> String {
    let lower = text.to_lowercase();
    match KNOWN_NAMES.iter().find(|(needle, _)| lower.contains(needle)) {
        Some((_, display)) => format!("Hello {display}! How can I assist you today?"),
        None => "Hello! How can I assist you today?".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_gets_prompt() {
        for input in ["", "   ", "\n\t"] {
            let reply = compose_reply(input);
            assert_eq!(reply.reply, EMPTY_QUERY_REPLY);
            assert!(!reply.has_details);
            assert!(reply.details.is_empty());
            assert_eq!(reply.intent, None);
        }
    }

    #[test]
    fn greeting_has_no_details() {
        let reply = compose_reply("hello i want food");
        assert_eq!(reply.reply, "Hello! How can I assist you today?");
        assert!(!reply.has_details);
        assert_eq!(reply.intent, Some(Intent::Greeting));
    }

    #[test]
    fn greeting_uses_known_name() {
        let reply = compose_reply("hi sanjay here");
        assert_eq!(reply.reply, "Hello Sanjay! How can I assist you today?");
    }

    #[test]
    fn unknown_query_falls_back_to_web_search() {
        let text = "xyz123 completely unrelated gibberish";
        let reply = compose_reply(text);

        assert_eq!(reply.intent, Some(Intent::Unknown));
        assert!(reply.has_details);
        assert_eq!(reply.details.len(), 1);
        assert_eq!(
            reply.details[0].platform_url,
            "https://www.google.com/search?q=xyz123+completely+unrelated+gibberish"
        );
        assert_eq!(
            reply.reply,
            format!("Sorry, I couldn't detect a specific intent. I searched web for '{text}'.")
        );
    }

    #[test]
    fn family_reply_accompanies_cards() {
        let reply = compose_reply("  Chicken Biriyani ");
        assert_eq!(reply.family, Some(Family::Restaurants));
        assert_eq!(
            reply.reply,
            "Here are search results for restaurants matching your query."
        );
        assert_eq!(reply.details.len(), 3);
        assert!(reply.details[0].platform_url.ends_with("Chicken+Biriyani"));
    }

    #[test]
    fn each_family_has_its_own_reply() {
        let cases = [
            (
                "chicken biriyani",
                Family::Restaurants,
                "Here are search results for restaurants matching your query.",
            ),
            ("cheap hotel", Family::Hotels, "Here are hotels matching your query."),
            (
                "flight to goa",
                Family::Flights,
                "Here are flight search pages for your query.",
            ),
            ("train to delhi", Family::Trains, "Train search pages for your query."),
            ("cricket match", Family::Events, "Events & tickets search results."),
            (
                "buy laptop",
                Family::Products,
                "Product search results across marketplaces.",
            ),
            ("book a cab", Family::Taxi, "Taxi / ride options and search pages."),
            (
                "mandir timings",
                Family::Temple,
                "Places of worship (open in Google Maps).",
            ),
        ];
        assert_eq!(cases.len(), Family::ALL.len());

        for (query, family, expected) in cases {
            let reply = compose_reply(query);
            assert_eq!(reply.family, Some(family), "{query}");
            assert_eq!(reply.reply, expected, "{query}");
            assert_eq!(family_reply(family), expected);
            assert!(reply.has_details);
        }
    }

    #[test]
    fn identical_input_gives_identical_reply() {
        assert_eq!(compose_reply("cheap flights to goa"), compose_reply("cheap flights to goa"));
    }
}
