use super::*;

#[test]
fn parses_parse_command_with_defaults() {
    let cli = Cli::try_parse_from(["tripwear-cli", "parse"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Parse {
            file: None,
            gender: None,
            plan: false,
            pretty: false,
        }
    ));
}

#[test]
fn parses_parse_command_with_file_and_flags() {
    let cli = Cli::try_parse_from([
        "tripwear-cli",
        "parse",
        "response.md",
        "--gender",
        "female",
        "--plan",
        "--pretty",
    ])
    .expect("expected valid cli args");
    match cli.command {
        Commands::Parse {
            file,
            gender,
            plan,
            pretty,
        } => {
            assert_eq!(file, Some(PathBuf::from("response.md")));
            assert_eq!(gender.as_deref(), Some("female"));
            assert!(plan);
            assert!(pretty);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_closet_command() {
    let cli = Cli::try_parse_from(["tripwear-cli", "closet", "results.json", "--pretty"])
        .expect("expected valid cli args");
    match cli.command {
        Commands::Closet { file, pretty } => {
            assert_eq!(file, Some(PathBuf::from("results.json")));
            assert!(pretty);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn file_results_keeps_purchasable_valid_items() {
    let results: Vec<tripwear_core::ShoppingResult> = serde_json::from_str(
        r#"[
            {"title": "Linen Shorts", "price": "$24.99", "link": "https://shop.example/shorts",
             "thumbnail": "https://img.example/shorts.jpg", "source": "Coast Co"},
            {"title": "No Price Tee", "link": "https://shop.example/tee"},
            {"title": "Script Hat", "price": "$5", "link": "javascript:void(0)"},
            {"title": "Pricey Scarf", "price": "$1234567890123456789012", "link": "https://shop.example/scarf"}
        ]"#,
    )
    .unwrap();
    let items = closet::file_results(results);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Linen Shorts");
    assert_eq!(items[0].item_type, tripwear_core::ClothingCategory::Bottom);
    assert_eq!(items[0].source.as_deref(), Some("Coast Co"));
}

#[test]
fn categorize_requires_a_title() {
    assert!(Cli::try_parse_from(["tripwear-cli", "categorize"]).is_err());
}

#[test]
fn parses_prompt_command_with_repeated_activities() {
    let cli = Cli::try_parse_from([
        "tripwear-cli",
        "prompt",
        "--city",
        "Denver",
        "--region",
        "CO",
        "--start",
        "2025-07-20",
        "--end",
        "2025-07-22",
        "--activity",
        "hiking",
        "--activity",
        "museums",
    ])
    .expect("expected valid cli args");
    match cli.command {
        Commands::Prompt {
            start,
            activities,
            age,
            ..
        } => {
            assert_eq!(start, NaiveDate::from_ymd_opt(2025, 7, 20).unwrap());
            assert_eq!(activities, vec!["hiking", "museums"]);
            assert!(age.is_none());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn prompt_rejects_malformed_date() {
    let result = Cli::try_parse_from([
        "tripwear-cli",
        "prompt",
        "--city",
        "Denver",
        "--region",
        "CO",
        "--start",
        "July 20",
        "--end",
        "2025-07-22",
    ]);
    assert!(result.is_err());
}

#[test]
fn search_plan_splits_general_query() {
    let days = tripwear_parser::parse(
        "Day 1:\nShorts day.\n**Search Query:** tank top, shorts\n",
        Some("female"),
    );
    let plan = outfits::search_plan(&days, Some("female"));
    let day = &plan["days"][0];
    assert_eq!(day["label"], "Day 1");
    assert_eq!(day["image_query"], "female tank top shorts");
    let searches = day["searches"].as_array().unwrap();
    assert_eq!(searches.len(), 2);
    assert_eq!(searches[0]["query"], "female tank top");
    assert_eq!(searches[1]["query"], "female shorts");
    assert_eq!(searches[1]["category"], "general");
}

#[test]
fn search_plan_keeps_categorized_queries_whole() {
    let days = tripwear_parser::parse(
        "**Product Searches:**\n- Top: linen shirt, white\n- Shoes: loafers",
        None,
    );
    let plan = outfits::search_plan(&days, None);
    let searches = plan["days"][0]["searches"].as_array().unwrap();
    assert_eq!(searches.len(), 2);
    assert_eq!(searches[0]["category"], "Top");
    assert_eq!(searches[0]["query"], "linen shirt, white");
    assert_eq!(plan["days"][0]["image_query"], "shirt");
}
