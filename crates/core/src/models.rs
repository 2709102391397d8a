use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Restaurant,
    Hotel,
    Flight,
    Train,
    Event,
    Product,
    Taxi,
    Temple,
    Unknown,
}

impl Intent {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Restaurant => "restaurant",
            Self::Hotel => "hotel",
            Self::Flight => "flight",
            Self::Train => "train",
            Self::Event => "event",
            Self::Product => "product",
            Self::Taxi => "taxi",
            Self::Temple => "temple",
            Self::Unknown => "unknown",
        }
    }

    /// Template family rendered for this intent. Greeting and unknown have none.
    pub fn family(self) -> Option<Family> {
        match self {
            Self::Restaurant => Some(Family::Restaurants),
            Self::Hotel => Some(Family::Hotels),
            Self::Flight => Some(Family::Flights),
            Self::Train => Some(Family::Trains),
            Self::Event => Some(Family::Events),
            Self::Product => Some(Family::Products),
            Self::Taxi => Some(Family::Taxi),
            Self::Temple => Some(Family::Temple),
            Self::Greeting | Self::Unknown => None,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key of a platform template group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Restaurants,
    Hotels,
    Flights,
    Trains,
    Events,
    Products,
    Taxi,
    Temple,
}

impl Family {
    pub const ALL: [Family; 8] = [
        Self::Restaurants,
        Self::Hotels,
        Self::Flights,
        Self::Trains,
        Self::Events,
        Self::Products,
        Self::Taxi,
        Self::Temple,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Restaurants => "restaurants",
            Self::Hotels => "hotels",
            Self::Flights => "flights",
            Self::Trains => "trains",
            Self::Events => "events",
            Self::Products => "products",
            Self::Taxi => "taxi",
            Self::Temple => "temple",
        }
    }

    /// Singular form used as the record `type`: the key minus one trailing `s`.
    pub fn record_type(self) -> &'static str {
        let key = self.key();
        key.strip_suffix('s').unwrap_or(key)
    }

    pub fn intent(self) -> Intent {
        match self {
            Self::Restaurants => Intent::Restaurant,
            Self::Hotels => Intent::Hotel,
            Self::Flights => Intent::Flight,
            Self::Trains => Intent::Train,
            Self::Events => Intent::Event,
            Self::Products => Intent::Product,
            Self::Taxi => Intent::Taxi,
            Self::Temple => Intent::Temple,
        }
    }

    /// Exact key lookup; no case folding or trimming.
    pub fn from_key(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|family| family.key() == value)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Family {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_key(&value.trim().to_lowercase())
            .ok_or_else(|| CoreError::UnknownFamily(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub intent: Intent,
    pub family: Option<Family>,
}

impl ClassificationResult {
    pub fn greeting() -> Self {
        Self {
            intent: Intent::Greeting,
            family: None,
        }
    }

    pub fn unknown() -> Self {
        Self {
            intent: Intent::Unknown,
            family: None,
        }
    }

    pub fn for_family(family: Family) -> Self {
        Self {
            intent: family.intent(),
            family: Some(family),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentScore {
    pub intent: Intent,
    pub score: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformTemplate {
    pub name: &'static str,
    pub url_template: &'static str,
}

/// Per-family card attributes. These are placeholders: nothing is fetched
/// from the platforms, so the values are fixed strings.
///
/// Variant order matters for deserialization; flights, trains and taxi
/// share the `Travel` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FamilyDetails {
    Restaurant {
        timing: String,
        district: String,
        dishes: Vec<String>,
    },
    Hotel {
        price: String,
        location: String,
    },
    Temple {
        location: String,
        distance: String,
    },
    Travel {
        duration: String,
        price: String,
    },
    Event {
        date: String,
        venue: String,
    },
    Product {
        price: String,
    },
}

impl FamilyDetails {
    pub fn placeholder(family: Family) -> Self {
        match family {
            Family::Restaurants => Self::Restaurant {
                timing: "Check on platform".to_string(),
                district: String::new(),
                dishes: Vec::new(),
            },
            Family::Hotels => Self::Hotel {
                price: "Check on platform".to_string(),
                location: String::new(),
            },
            Family::Flights | Family::Trains => Self::Travel {
                duration: "Varies".to_string(),
                price: "Check platform".to_string(),
            },
            Family::Events => Self::Event {
                date: "Check platform".to_string(),
                venue: "Check platform".to_string(),
            },
            Family::Products => Self::Product {
                price: "Check platform".to_string(),
            },
            Family::Taxi => Self::Travel {
                duration: "N/A".to_string(),
                price: "Check platform".to_string(),
            },
            Family::Temple => Self::Temple {
                location: "Nearby".to_string(),
                distance: "Varies".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub image: String,
    pub platform: String,
    pub platform_url: String,
    #[serde(flatten)]
    pub details: Option<FamilyDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentReply {
    pub reply: String,
    pub has_details: bool,
    pub details: Vec<ResultRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<Family>,
}

impl AgentReply {
    pub fn new(reply: impl Into<String>, details: Vec<ResultRecord>) -> Self {
        Self {
            reply: reply.into(),
            has_details: !details.is_empty(),
            details,
            intent: None,
            family: None,
        }
    }

    pub fn with_classification(mut self, classification: ClassificationResult) -> Self {
        self.intent = Some(classification.intent);
        self.family = classification.family;
        self
    }
}
