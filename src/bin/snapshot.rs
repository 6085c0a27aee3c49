// src/bin/snapshot.rs
// Refreshes the fallback catalog from a running gateway.
use anyhow::{anyhow, bail, Context, Result};
use dotenv::dotenv;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::env;
use std::path::{Path, PathBuf};
use std::process;
use std::time::{Duration, Instant};

// --- ANSI colours for the terminal ---
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Largest page the gateway hands out
const PAGE_SIZE: usize = 100;

#[derive(Debug, Clone, Copy)]
enum SectionKind {
    Page,
    List,
}

#[derive(Debug, Clone, Copy)]
struct Section {
    /// Key in the catalog file
    key: &'static str,
    /// Gateway route
    route: &'static str,
    kind: SectionKind,
}

const SECTIONS: &[Section] = &[
    Section { key: "home", route: "/api/home", kind: SectionKind::Page },
    Section { key: "tours", route: "/api/tours", kind: SectionKind::List },
    Section { key: "packages", route: "/api/packages", kind: SectionKind::List },
    Section { key: "excursions", route: "/api/excursions", kind: SectionKind::List },
    Section { key: "destinations", route: "/api/destinations", kind: SectionKind::List },
    Section { key: "reviews", route: "/api/reviews", kind: SectionKind::List },
    Section { key: "services", route: "/api/services", kind: SectionKind::Page },
    Section { key: "about", route: "/api/about", kind: SectionKind::Page },
    Section { key: "contact", route: "/api/contact", kind: SectionKind::Page },
];

#[derive(Deserialize, Debug)]
struct PageBody {
    data: Value,
    source: String,
}

#[derive(Deserialize, Debug)]
struct ListBody {
    data: Vec<Value>,
    total: usize,
    source: String,
}

#[derive(Debug)]
enum Outcome {
    Updated { items: Option<usize> },
    /// Gateway answered from its own fallback; previous value kept
    Stale,
    Failed(String),
}

#[derive(Debug)]
struct SectionResult {
    key: &'static str,
    outcome: Outcome,
    duration_secs: f64,
}

/// Only content that came from the content API is worth snapshotting
fn is_fresh(source: &str) -> bool {
    source == "live" || source == "cache"
}

struct SnapshotManager {
    base_url: String,
    client: Client,
    results: Vec<SectionResult>,
}

impl SnapshotManager {
    fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            results: Vec::new(),
        })
    }

    async fn check_service_health(&self) -> bool {
        match self.client.get(format!("{}/health", self.base_url)).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    /// Flush the gateway cache so every section is fetched from the content API
    async fn clear_gateway_cache(&self, admin_token: &str) -> Result<()> {
        let response = self
            .client
            .post(format!("{}/admin/cache/clear", self.base_url))
            .header("X-Admin-Token", admin_token)
            .send()
            .await?;

        if !response.status().is_success() {
            bail!("cache clear answered HTTP {}", response.status());
        }
        Ok(())
    }

    async fn get<T: for<'de> Deserialize<'de>>(&self, route: &str) -> Result<T> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, route))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("HTTP {} - {}", status, body);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| anyhow!("Failed to parse response JSON: {}", e))
    }

    async fn fetch_page(&self, route: &str) -> Result<Option<Value>> {
        let body: PageBody = self.get(route).await?;
        Ok(is_fresh(&body.source).then_some(body.data))
    }

    async fn fetch_list(&self, route: &str) -> Result<Option<Vec<Value>>> {
        let mut items = Vec::new();
        let mut offset = 0;

        loop {
            let page: ListBody = self
                .get(&format!("{}?limit={}&offset={}", route, PAGE_SIZE, offset))
                .await?;

            if !is_fresh(&page.source) {
                return Ok(None);
            }

            let received = page.data.len();
            items.extend(page.data);
            offset += received;

            if received == 0 || offset >= page.total {
                return Ok(Some(items));
            }
        }
    }

    async fn fetch_section(&self, section: &Section) -> Result<Option<(Value, Option<usize>)>> {
        Ok(match section.kind {
            SectionKind::Page => self.fetch_page(section.route).await?.map(|v| (v, None)),
            SectionKind::List => self.fetch_list(section.route).await?.map(|items| {
                let count = items.len();
                (Value::Array(items), Some(count))
            }),
        })
    }

    async fn run(&mut self, catalog: &mut Map<String, Value>) {
        println!("\n{}🔍 Checking gateway status...{}", CYAN, RESET);
        if !self.check_service_health().await {
            println!("{}❌ Gateway unavailable at {}.{}", RED, self.base_url, RESET);
            println!("{}Please ensure the gateway is running (cargo run){}", YELLOW, RESET);
            process::exit(1);
        }
        println!("{}✅ Gateway available{}\n", GREEN, RESET);

        self.print_header();

        let total = SECTIONS.len();
        for (i, section) in SECTIONS.iter().enumerate() {
            let start_time = Instant::now();
            println!("{}[{}/{}] Fetching {}...{}", CYAN, i + 1, total, section.key, RESET);

            let outcome = match self.fetch_section(section).await {
                Ok(Some((value, items))) => {
                    catalog.insert(section.key.to_string(), value);
                    Outcome::Updated { items }
                }
                Ok(None) => Outcome::Stale,
                Err(e) => Outcome::Failed(e.to_string()),
            };

            match &outcome {
                Outcome::Updated { .. } => println!("{}✅ {} updated{}", GREEN, section.key, RESET),
                Outcome::Stale => println!(
                    "{}⚠️  {} served from fallback, keeping previous value{}",
                    YELLOW, section.key, RESET
                ),
                Outcome::Failed(e) => println!("{}❌ {}: {}{}", RED, section.key, e, RESET),
            }

            self.results.push(SectionResult {
                key: section.key,
                outcome,
                duration_secs: start_time.elapsed().as_secs_f64(),
            });
        }

        self.print_summary();
    }

    fn updated_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Updated { .. }))
            .count()
    }

    fn print_header(&self) {
        println!("{}╔══════════════════════════════════════════════════════════════╗{}", CYAN, RESET);
        println!("{}║   🌴  Fallback Snapshot - content gateway                     ║{}", CYAN, RESET);
        println!("{}╚══════════════════════════════════════════════════════════════╝{}", CYAN, RESET);
        println!("\n{}📊 Sections to fetch: {}{}", BOLD, SECTIONS.len(), RESET);
    }

    fn print_summary(&self) {
        println!("\n\n{}📋 Snapshot Summary{}", BOLD, RESET);
        println!("──────────────────────────────────────────────────────────────");
        println!("{:<16} {:<10} {:>10} {:>10}", "Section", "Status", "Items", "Duration");
        println!("──────────────────────────────────────────────────────────────");

        for res in &self.results {
            let (status, items) = match &res.outcome {
                Outcome::Updated { items } => (
                    "✅",
                    items.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string()),
                ),
                Outcome::Stale => ("⚠️", "-".to_string()),
                Outcome::Failed(_) => ("❌", "-".to_string()),
            };
            println!(
                "{:<16} {:<10} {:>10} {:>9.1}s",
                res.key, status, items, res.duration_secs
            );
        }

        println!("──────────────────────────────────────────────────────────────");
        println!(
            "\n{}✨ {} of {} sections refreshed{}",
            GREEN,
            self.updated_count(),
            self.results.len(),
            RESET
        );
    }
}

fn read_catalog(path: &Path) -> Result<Map<String, Value>> {
    if !path.exists() {
        return Ok(Map::new());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    match serde_json::from_str::<Value>(&raw).with_context(|| format!("parsing {}", path.display()))? {
        Value::Object(map) => Ok(map),
        _ => bail!("{} does not hold a JSON object", path.display()),
    }
}

fn write_catalog(path: &Path, catalog: &Map<String, Value>) -> Result<()> {
    let tmp = path.with_extension("json.tmp");
    let body = serde_json::to_string_pretty(catalog)?;
    std::fs::write(&tmp, body + "\n").with_context(|| format!("writing {}", tmp.display()))?;
    std::fs::rename(&tmp, path).with_context(|| format!("replacing {}", path.display()))?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let base_url = env::var("GATEWAY_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
    let output = PathBuf::from(
        env::args()
            .nth(1)
            .or_else(|| env::var("FALLBACK_PATH").ok())
            .unwrap_or_else(|| "data/fallback.json".to_string()),
    );

    let mut catalog = read_catalog(&output)?;
    let mut manager = SnapshotManager::new(base_url)?;

    match env::var("ADMIN_TOKEN") {
        Ok(token) => {
            if let Err(e) = manager.clear_gateway_cache(&token).await {
                println!("{}⚠️  Could not clear gateway cache: {}{}", YELLOW, e, RESET);
            }
        }
        Err(_) => println!(
            "{}⚠️  ADMIN_TOKEN not set; cached sections may be up to one TTL old.{}",
            YELLOW, RESET
        ),
    }

    manager.run(&mut catalog).await;

    if manager.updated_count() == 0 {
        println!("{}Nothing refreshed; {} left untouched.{}", YELLOW, output.display(), RESET);
        return Ok(());
    }

    write_catalog(&output, &catalog)?;
    println!("{}💾 Wrote {}{}", BOLD, output.display(), RESET);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_sources() {
        assert!(is_fresh("live"));
        assert!(is_fresh("cache"));
        assert!(!is_fresh("fallback"));
    }

    #[test]
    fn test_catalog_round_trip_keeps_other_sections() {
        let path = env::temp_dir().join(format!("snapshot-{}.json", process::id()));
        std::fs::write(&path, r#"{"about": {"title": "Old"}, "contact": {"email": "a@b.lk"}}"#)
            .unwrap();

        let mut catalog = read_catalog(&path).unwrap();
        catalog.insert("about".to_string(), serde_json::json!({ "title": "New" }));
        write_catalog(&path, &catalog).unwrap();

        let reread = read_catalog(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(reread["about"]["title"], "New");
        assert_eq!(reread["contact"]["email"], "a@b.lk");
    }

    #[test]
    fn test_missing_catalog_is_empty() {
        let catalog = read_catalog(Path::new("/nonexistent/catalog.json")).unwrap();
        assert!(catalog.is_empty());
    }
}
