//! Compiled-in routing tables. Order in every table is observable: keyword
//! entries define the intent tie-break, template entries define card order.

use once_cell::sync::Lazy;

use crate::models::{Family, Intent, PlatformTemplate};

pub const QUERY_PLACEHOLDER: &str = "{q}";

pub const GREETING_PHRASES: &[&str] = &[
    "hey",
    "hi",
    "hello",
    "wassup",
    "good morning",
    "good evening",
];

/// Names that get a personalised greeting: (lowercase match, display form).
pub const KNOWN_NAMES: &[(&str, &str)] = &[("sanjay", "Sanjay")];

pub const KEYWORD_TABLE: &[(Intent, &[&str])] = &[
    (
        Intent::Restaurant,
        &[
            "restaurant",
            "restaurants",
            "food",
            "dine",
            "cafe",
            "eat",
            "biriyani",
            "pizza",
            "chicken",
            "burger",
            "restaurant near",
        ],
    ),
    (
        Intent::Hotel,
        &["hotel", "hotels", "room", "stay", "lodging", "resort"],
    ),
    (
        Intent::Flight,
        &["flight", "flights", "airline", "plane", "ticket", "fly"],
    ),
    (
        Intent::Train,
        &["train", "trains", "railway", "irctc", "pnr", "ticket"],
    ),
    (
        Intent::Event,
        &[
            "cricket", "match", "movie", "concert", "show", "t20i", "odi", "football", "event",
            "ticket",
        ],
    ),
    (
        Intent::Product,
        &[
            "buy", "purchase", "order", "shop", "amazon", "flipkart", "ebay", "product", "shampoo",
            "dress", "laptop",
        ],
    ),
    (
        Intent::Taxi,
        &["taxi", "cab", "ola", "uber", "rapido", "ride"],
    ),
    (
        Intent::Temple,
        &[
            "temple",
            "mandir",
            "church",
            "mosque",
            "gurudwara",
            "place of worship",
            "near me",
            "nearby",
        ],
    ),
];

pub const TEMPLATE_FAMILIES: &[(Family, &[PlatformTemplate])] = &[
    (
        Family::Restaurants,
        &[
            PlatformTemplate {
                name: "Zomato",
                url_template: "https://www.zomato.com/search?query={q}",
            },
            PlatformTemplate {
                name: "Swiggy",
                url_template: "https://www.swiggy.com/search?q={q}",
            },
            PlatformTemplate {
                name: "Google Maps",
                url_template: "https://www.google.com/maps/search/{q}",
            },
        ],
    ),
    (
        Family::Hotels,
        &[
            PlatformTemplate {
                name: "Booking.com",
                url_template: "https://www.booking.com/searchresults.html?ss={q}",
            },
            PlatformTemplate {
                name: "Agoda",
                url_template: "https://www.agoda.com/search?city={q}",
            },
        ],
    ),
    (
        Family::Flights,
        &[
            PlatformTemplate {
                name: "MakeMyTrip",
                url_template: "https://www.makemytrip.com/flights/?q={q}",
            },
            PlatformTemplate {
                name: "Skyscanner",
                url_template: "https://www.skyscanner.co.in/transport/flights?query={q}",
            },
        ],
    ),
    (
        Family::Trains,
        &[
            PlatformTemplate {
                name: "IRCTC",
                url_template: "https://www.irctc.co.in/nget/train-search",
            },
            PlatformTemplate {
                name: "Google",
                url_template: "https://www.google.com/search?q={q}+train+tickets",
            },
        ],
    ),
    (
        Family::Events,
        &[
            PlatformTemplate {
                name: "BookMyShow",
                url_template: "https://in.bookmyshow.com/explore/search?q={q}",
            },
            PlatformTemplate {
                name: "TicketMaster",
                url_template: "https://www.ticketmaster.com/search?q={q}",
            },
        ],
    ),
    (
        Family::Products,
        &[
            PlatformTemplate {
                name: "Amazon",
                url_template: "https://www.amazon.in/s?k={q}",
            },
            PlatformTemplate {
                name: "Flipkart",
                url_template: "https://www.flipkart.com/search?q={q}",
            },
            PlatformTemplate {
                name: "eBay",
                url_template: "https://www.ebay.in/sch/i.html?_nkw={q}",
            },
        ],
    ),
    (
        Family::Taxi,
        &[
            PlatformTemplate {
                name: "Ola",
                url_template: "https://www.olacabs.com/search/?q={q}",
            },
            PlatformTemplate {
                name: "Uber",
                url_template: "https://www.uber.com/global/en/search/?q={q}",
            },
            PlatformTemplate {
                name: "Google",
                url_template: "https://www.google.com/search?q={q}+taxi",
            },
        ],
    ),
    (
        Family::Temple,
        &[PlatformTemplate {
            name: "Google Maps",
            url_template: "https://www.google.com/maps/search/{q}",
        }],
    ),
];

/// Every keyword of every intent, flattened in table order.
pub static ALL_KEYWORDS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    KEYWORD_TABLE
        .iter()
        .flat_map(|(_, keywords)| keywords.iter().copied())
        .collect()
});

pub fn templates_for(family: Family) -> &'static [PlatformTemplate] {
    TEMPLATE_FAMILIES
        .iter()
        .find(|(candidate, _)| *candidate == family)
        .map(|(_, templates)| *templates)
        .unwrap_or(&[])
}
