use wallet::{
    rank_balances, rate, Balance, FormattedBalance, Ledger, PriceBook, PriceQuote,
    PriorityResolver, StaticPriorities, SENTINEL_PRIORITY,
};

fn wallet_snapshot() -> Vec<Balance> {
    vec![
        Balance::new("ETH", 2.0, Ledger::Ethereum).unwrap(),
        Balance::new("OSMO", 5.0, Ledger::Osmosis).unwrap(),
        Balance::new("ARB", 0.0, Ledger::Arbitrum).unwrap(),
        Balance::new("FOO", 3.0, "UnknownLedger").unwrap(),
    ]
}

fn prices(quotes: &[(&str, f64)]) -> PriceBook {
    PriceBook::from_quotes(
        quotes
            .iter()
            .map(|(currency, price)| PriceQuote::new(*currency, *price).unwrap()),
    )
}

#[test]
fn test_wallet_page_ranking() {
    let book = prices(&[("ETH", 100.0), ("OSMO", 10.0)]);
    let ranked = rank_balances(&wallet_snapshot(), &book);

    assert_eq!(ranked.len(), 2, "ARB (zero) and FOO (unknown ledger) must be excluded");

    assert_eq!(ranked[0].currency(), "OSMO");
    assert_eq!(ranked[0].priority(), 100);
    assert_eq!(ranked[0].formatted(), "5");
    assert_eq!(ranked[0].usd_value(), Some(50.0));

    assert_eq!(ranked[1].currency(), "ETH");
    assert_eq!(ranked[1].priority(), 50);
    assert_eq!(ranked[1].formatted(), "2");
    assert_eq!(ranked[1].usd_value(), Some(200.0));
}

#[test]
fn test_excluded_balances_never_appear_for_any_price_map() {
    let books = [
        PriceBook::new(),
        prices(&[("ARB", 1.2), ("FOO", 9.0)]),
        prices(&[("ETH", 100.0), ("OSMO", 10.0), ("ARB", 1.2), ("FOO", 9.0)]),
    ];
    for book in &books {
        let ranked = rank_balances(&wallet_snapshot(), book);
        assert!(ranked.iter().all(|row| row.amount() > 0.0));
        assert!(ranked.iter().all(|row| row.priority() > SENTINEL_PRIORITY));
        assert!(!ranked.iter().any(|row| row.currency() == "FOO" || row.currency() == "ARB"));
    }
}

#[test]
fn test_output_is_non_increasing_by_priority() {
    let mut balances = wallet_snapshot();
    balances.extend([
        Balance::new("NEO", 4.0, Ledger::Neo).unwrap(),
        Balance::new("ZIL", 900.0, Ledger::Zilliqa).unwrap(),
        Balance::new("USDC", 12.0, Ledger::Arbitrum).unwrap(),
        Balance::new("WETH", 0.5, Ledger::Osmosis).unwrap(),
    ]);
    let ranked = rank_balances(&balances, &PriceBook::new());
    let resolver = StaticPriorities;

    for pair in ranked.windows(2) {
        let (lhs, rhs) = (&pair[0], &pair[1]);
        assert!(lhs.priority() >= rhs.priority());
        assert_eq!(lhs.priority(), resolver.priority(lhs.ledger()));
        if lhs.priority() == rhs.priority() {
            assert!(lhs.currency() <= rhs.currency(), "{} before {}", lhs.key(), rhs.key());
        }
    }
}

#[test]
fn test_rows_keyed_by_ledger_and_currency() {
    let ranked = rank_balances(&wallet_snapshot(), &PriceBook::new());
    let keys: Vec<String> = ranked.iter().map(FormattedBalance::key).collect();
    assert_eq!(keys, vec!["Osmosis-OSMO", "Ethereum-ETH"]);
}

#[test]
fn test_swap_rate_scenarios() {
    let book = prices(&[("BTC", 50000.0), ("ETH", 2500.0)]);
    assert_eq!(rate("ETH", "BTC", &book), Some(20.0));
    assert_eq!(rate("ETH", "ETH", &book), Some(1.0));
    assert_eq!(rate("ETH", "BTC", &PriceBook::new()), None);
}

#[test]
fn test_feed_snapshot_round_trip_through_json() {
    let feed = r#"[
        {"currency":"ETH","date":"2023-08-29T07:10:52.000Z","price":1645.9337373737374},
        {"currency":"USDC","date":"2023-08-29T07:10:30.000Z","price":0.989832},
        {"currency":"USDC","date":"2023-08-29T07:10:40.000Z","price":1}
    ]"#;
    let quotes: Vec<PriceQuote> = serde_json::from_str(feed).unwrap();
    let book = PriceBook::from_quotes(quotes);

    assert_eq!(book.len(), 2);
    assert_eq!(book.get("USDC"), Some(1.0));

    let balances: Vec<Balance> = serde_json::from_str(
        r#"[{"currency":"USDC","amount":10.4,"blockchain":"Neo"},
            {"currency":"ETH","amount":1,"ledger":"Ethereum"}]"#,
    )
    .unwrap();
    let ranked = rank_balances(&balances, &book);
    assert_eq!(ranked[0].currency(), "ETH");
    assert_eq!(ranked[1].formatted(), "10");
    assert_eq!(ranked[1].usd_value(), Some(10.4));
}
