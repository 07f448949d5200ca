use proptest::prelude::*;
use tripwear_parser::{parse, prefix_gender};

fn gender_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("female".to_string())),
        Just(Some("women's".to_string())),
        "[a-zA-Z' ]{0,12}".prop_map(Some),
    ]
}

// Fragments the generator tends to emit, mixed with noise.
fn fragment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("**Day 1 (Jul 20): Hike**\n".to_string()),
        Just("### Day 2: City\n".to_string()),
        Just("Day 3:\n".to_string()),
        Just("**Product Searches:**\n".to_string()),
        Just("- Top: \"tee\" or \"tank\"\n".to_string()),
        Just("- **Shoes:** sandals or boots\n".to_string()),
        Just("**Search Query:** hat, scarf\n".to_string()),
        Just("**".to_string()),
        Just("\"".to_string()),
        Just("“".to_string()),
        Just("\n\n".to_string()),
        any::<String>(),
    ]
}

proptest! {
    #[test]
    fn parse_never_panics(text in any::<String>(), gender in gender_strategy()) {
        let days = parse(&text, gender.as_deref());
        for day in &days {
            prop_assert!(!day.label.is_empty());
            prop_assert!(day.day_number >= 1);
        }
    }

    #[test]
    fn parse_never_panics_on_structured_noise(
        parts in prop::collection::vec(fragment_strategy(), 0..40),
        gender in gender_strategy(),
    ) {
        let text = parts.concat();
        let days = parse(&text, gender.as_deref());
        prop_assert_eq!(days.is_empty(), text.is_empty());
    }

    #[test]
    fn empty_input_is_always_empty(gender in gender_strategy()) {
        prop_assert!(parse("", gender.as_deref()).is_empty());
    }

    #[test]
    fn day_numbers_follow_heading_order(n in 1usize..30, body in "[a-z ]{0,20}") {
        let text: String = (1..=n)
            .map(|i| format!("**Day {i}**\n{body}\n"))
            .collect();
        let numbers: Vec<u32> = parse(&text, None).iter().map(|d| d.day_number).collect();
        let expected: Vec<u32> = (1..=u32::try_from(n).unwrap()).collect();
        prop_assert_eq!(numbers, expected);
    }

    #[test]
    fn gender_prefix_is_idempotent(gender in "[a-zA-Z']{1,10}", query in "[a-z ]{1,30}") {
        let once = prefix_gender(&gender, &query);
        let twice = prefix_gender(&gender, &once);
        prop_assert_eq!(once, twice);
    }
}
