//! Snapshot loader scenarios against a mock HTTP source.

use httpmock::prelude::*;
use insight_core::{SnapshotLoader, SourceLabel};

#[tokio::test]
async fn http_500_falls_back_to_demo_snapshot() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/chain_data.json");
            then.status(500);
        })
        .await;

    let loader = SnapshotLoader::new(server.url("/chain_data.json"));
    let snapshot = loader.load().await;

    mock.assert_async().await;
    assert_eq!(snapshot.source, SourceLabel::Demo);
    assert_eq!(snapshot.source.to_string(), "Demo Snapshot");
    assert_eq!(snapshot.records.len(), 10);
    assert_eq!(snapshot.records[0].name, "Ethereum");
}

#[tokio::test]
async fn unparseable_body_falls_back_to_demo_snapshot() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/chain_data.json");
            then.status(200).body("<html>not json</html>");
        })
        .await;

    let loader = SnapshotLoader::new(server.url("/chain_data.json"));
    let snapshot = loader.load().await;

    assert_eq!(snapshot.source, SourceLabel::Demo);
}

#[tokio::test]
async fn unreachable_source_falls_back_to_demo_snapshot() {
    // Reserved port, nothing listening: connection refused.
    let loader = SnapshotLoader::new("http://127.0.0.1:1/chain_data.json");
    let snapshot = loader.load().await;

    assert_eq!(snapshot.source, SourceLabel::Demo);
    assert_eq!(snapshot.records.len(), 10);
}

#[tokio::test]
async fn live_source_is_normalized_and_labeled() -> anyhow::Result<()> {
    let body = serde_json::json!([
        {
            "rank": 1, "name": "Base", "symbol": "ETH", "category": "L2",
            "tvl": 2_500_000_000u64, "tx_24h": 4_200_000u64,
            "gov_symbol": null
        },
        {
            "rank": 2, "name": "Solana", "symbol": "SOL", "category": "L1",
            "price": 245.2, "fdv": 140_000_000_000u64, "tx_24h": 35_000_000u64
        }
    ]);

    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/chain_data.json");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(body.clone());
        })
        .await;

    let loader = SnapshotLoader::new(server.url("/chain_data.json"));
    let snapshot = loader.load().await;

    assert_eq!(snapshot.source, SourceLabel::Live);
    assert_eq!(snapshot.source.to_string(), "Live Data");
    assert_eq!(snapshot.records.len(), 2);

    // Downstream only ever sees canonical records: defaults are filled in,
    // the explicit null survives.
    let base = &snapshot.records[0];
    assert_eq!(base.gas_symbol, "ETH");
    assert_eq!(base.gov_symbol, None);

    let solana = &snapshot.records[1];
    assert_eq!(solana.gas_symbol, "SOL");
    assert_eq!(solana.gov_symbol.as_deref(), Some("SOL"));
    Ok(())
}

#[tokio::test]
async fn generations_increase_across_loads() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/chain_data.json");
            then.status(200).json_body(serde_json::json!([]));
        })
        .await;

    let loader = SnapshotLoader::new(server.url("/chain_data.json"));
    let first = loader.load().await;
    let second = loader.load().await;

    assert!(second.generation > first.generation);
}
