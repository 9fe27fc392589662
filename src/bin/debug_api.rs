use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ticketdesk::config::load(None)?;
    let base = config.api.base_url.trim_end_matches('/').to_string();
    println!("Ticket API: {}", base);

    let client = reqwest::Client::new();

    println!("\n=== GET page 1 ===");
    let list_url = format!("{}?_page=1&_limit={}", base, config.pagination.page_size);
    let first_id = match fetch(&client, &list_url).await {
        Some(body) => serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get(0).and_then(|t| t.get("id")).cloned()),
        None => None,
    };

    println!("\n=== GET first ticket ===");
    match first_id {
        Some(id) => {
            let id = match id {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            fetch(&client, &format!("{}/{}", base, urlencoding::encode(&id))).await;
        }
        None => println!("No ticket id in list response, skipping"),
    }

    Ok(())
}

async fn fetch(client: &reqwest::Client, url: &str) -> Option<String> {
    println!("GET {}", url);
    match client.get(url).send().await {
        Ok(resp) => {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            println!("Status: {}", status);
            let end = body
                .char_indices()
                .nth(500)
                .map(|(i, _)| i)
                .unwrap_or(body.len());
            println!("Response: {}", &body[..end]);
            status.is_success().then_some(body)
        }
        Err(e) => {
            println!("Request failed: {}", e);
            None
        }
    }
}
