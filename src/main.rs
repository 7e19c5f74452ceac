mod config;
mod error;
mod extractor;
mod listing;
mod present;

use std::io::{self, Write};

use extractor::ExtractClient;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let settings = config::load();
    let client = ExtractClient::new(&settings);

    print!("Enter the company URL (e.g., openai.com): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let url = line.trim();

    println!("Scraping jobs from: {}", url);

    match extractor::extract_job_listings(&client, url).await {
        Ok(jobs) => print!("{}", present::render_listings(&jobs)),
        Err(e) => eprintln!("Error: {}", e),
    }

    Ok(())
}
