mod common;

use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use tokio::net::TcpListener;

use common::{seeded_app, valid_payload, TestApp};

struct Running {
    base_url: String,
    _app: TestApp,
}

async fn start_server() -> anyhow::Result<Running> {
    let t = seeded_app().await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    let app = t.app.clone();
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });
    Ok(Running { base_url, _app: t })
}

#[tokio::test]
async fn create_then_page_through_over_http() -> anyhow::Result<()> {
    let srv = start_server().await?;
    let client = reqwest::Client::new();

    let resp = client.post(format!("{}/profile/", srv.base_url)).json(&valid_payload()).send().await?;
    assert_eq!(resp.status(), HttpStatusCode::CREATED);
    let created: serde_json::Value = resp.json().await?;
    assert_eq!(created["labels"], serde_json::json!(["Label 1", "Label 2"]));

    // follow `next` links until exhausted
    let mut url = Some(format!("{}/profile/list?ordering=tel&page_size=4", srv.base_url));
    let mut seen = Vec::new();
    while let Some(u) = url {
        let body: serde_json::Value = client.get(&u).send().await?.error_for_status()?.json().await?;
        assert_eq!(body["count"], 6);
        for r in body["results"].as_array().into_iter().flatten() {
            seen.push(r["tel"].as_str().unwrap_or_default().to_string());
        }
        url = body["next"].as_str().map(str::to_string);
    }
    assert_eq!(seen.len(), 6);
    let mut sorted = seen.clone();
    sorted.sort();
    assert_eq!(seen, sorted);
    Ok(())
}
