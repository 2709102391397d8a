use std::thread;

use superagent_agents::RoutingAgent;
use superagent_core::tables::templates_for;
use superagent_core::{
    build_results_for_key, compose_reply, detect_intent, Family, Intent,
};
use superagent_observability::AppMetrics;

#[test]
fn every_family_key_renders_its_templates_in_order() {
    for family in Family::ALL {
        let records = build_results_for_key("weekend in goa", family.key());
        let templates = templates_for(family);

        assert_eq!(records.len(), templates.len());
        for (idx, (record, template)) in records.iter().zip(templates).enumerate() {
            assert_eq!(record.id, format!("{}-{}", family.key(), idx + 1));
            assert_eq!(record.platform, template.name);
            assert_eq!(record.record_type, family.record_type());
        }
    }
}

#[test]
fn classification_feeds_matching_family() {
    let cases = [
        ("cheap flights to delhi", Intent::Flight, Family::Flights),
        ("pnr status", Intent::Train, Family::Trains),
        ("cricket match tonight", Intent::Event, Family::Events),
        ("buy shampoo", Intent::Product, Family::Products),
        ("uber to airport", Intent::Taxi, Family::Taxi),
        ("church nearby", Intent::Temple, Family::Temple),
        ("resort with a pool", Intent::Hotel, Family::Hotels),
    ];

    for (text, intent, family) in cases {
        let result = detect_intent(text);
        assert_eq!(result.intent, intent, "{text}");
        assert_eq!(result.family, Some(family), "{text}");

        let reply = compose_reply(text);
        assert!(reply.has_details);
        assert_eq!(reply.details.len(), templates_for(family).len());
    }
}

#[test]
fn concurrent_queries_do_not_interfere() {
    let agent = RoutingAgent::new(AppMetrics::shared());
    let queries = ["chicken biriyani", "hello", "book a cab", "gibberish xyz123"];
    let expected = queries.map(compose_reply);

    thread::scope(|scope| {
        for _ in 0..4 {
            let agent = &agent;
            let expected = &expected;
            scope.spawn(move || {
                for (query, want) in queries.iter().zip(expected.iter()) {
                    assert_eq!(&agent.handle_query(query), want);
                }
            });
        }
    });

    assert_eq!(agent.metrics().snapshot().requests_total, 16);
}
