use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct Sensor {
    id: String,
    name: String,
    #[serde(rename = "type")]
    kind: String,
    category: String,
    color: String,
}

#[derive(Debug, Deserialize)]
struct SensorsResponse {
    sensors: Vec<Sensor>,
}

/// Resolve the server under test, or `None` when no live server is
/// reachable (these tests are smoke tests against a running instance).
async fn live_base(client: &Client) -> Option<String> {
    // ---
    let base = std::env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3002".into());
    match client.get(format!("{}/health", base)).send().await {
        Ok(resp) if resp.status().is_success() => Some(base),
        _ => {
            eprintln!("No live server at {}, skipping", base);
            None
        }
    }
}

#[tokio::test]
async fn sensors_endpoint_serves_seeded_registry() -> Result<()> {
    // ---
    let client = Client::new();
    let Some(base) = live_base(&client).await else {
        return Ok(());
    };

    let url = format!("{}/api/sensors", base);
    let body: SensorsResponse = client.get(&url).send().await?.json().await?;

    assert!(!body.sensors.is_empty(), "No sensors returned from {}", url);

    for s in body.sensors.iter().take(5) {
        // ---
        assert!(!s.id.is_empty(), "id should not be empty");
        assert!(!s.name.is_empty(), "name should not be empty");
        assert!(!s.kind.is_empty(), "type should not be empty");
        assert!(s.color.starts_with('#'), "color should be a hex value");
    }

    Ok(())
}

#[tokio::test]
async fn category_filter_is_exact() -> Result<()> {
    // ---
    let client = Client::new();
    let Some(base) = live_base(&client).await else {
        return Ok(());
    };

    let url = format!("{}/api/sensors?category=transportation", base);
    let body: SensorsResponse = client.get(&url).send().await?.json().await?;

    for sensor in &body.sensors {
        assert_eq!(sensor.category, "transportation", "Category filter failed");
    }

    // Unknown categories yield an empty set, not an error
    let url = format!("{}/api/sensors?category=surveillance", base);
    let resp = client.get(&url).send().await?;
    assert!(resp.status().is_success());
    let body: SensorsResponse = resp.json().await?;
    assert!(body.sensors.is_empty());

    Ok(())
}

#[tokio::test]
async fn missing_fields_yield_bad_request() -> Result<()> {
    // ---
    let client = Client::new();
    let Some(base) = live_base(&client).await else {
        return Ok(());
    };

    let resp = client
        .post(format!("{}/api/prompt", base))
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 400);
    let body: serde_json::Value = resp.json().await?;
    assert_eq!(body["error"], "prompt required");

    let resp = client
        .post(format!("{}/api/review", base))
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 400);
    let body: serde_json::Value = resp.json().await?;
    assert_eq!(body["error"], "neighborhood required");

    Ok(())
}

#[tokio::test]
async fn neighborhoods_are_listed() -> Result<()> {
    // ---
    let client = Client::new();
    let Some(base) = live_base(&client).await else {
        return Ok(());
    };

    let body: serde_json::Value = client
        .get(format!("{}/api/neighborhoods", base))
        .send()
        .await?
        .json()
        .await?;

    let neighborhoods = body["neighborhoods"].as_array().expect("neighborhoods array");
    assert_eq!(neighborhoods.len(), 16);
    assert!(neighborhoods
        .iter()
        .any(|n| n["key"] == "times square" && n["name"] == "Times Square"));

    Ok(())
}
