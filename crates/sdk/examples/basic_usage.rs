//! Basic SDK usage example.
//!
//! Looks up a keyword, a project and an organization against the live API.
//!
//! Run with: ROOTDATA_API_KEY=... cargo run --example basic_usage

use rootdata_sdk::{Language, OrganizationLookup, ProjectLookup, RootDataClient, RootDataResult};
use std::time::Duration;

#[tokio::main]
async fn main() -> RootDataResult<()> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("ROOTDATA_API_KEY").unwrap_or_default();

    let client = RootDataClient::builder()
        .api_key(api_key)
        .language(Language::En)
        .timeout(Duration::from_secs(10))
        .build()?;

    println!("Searching for 'ETH'...");
    let hits = client.search("ETH").await;
    println!("{}", hits.clone().into_value());

    println!("\nFetching project 12 with team members...");
    let project = client
        .get_project(ProjectLookup::by_id(12).include_team(true))
        .await;
    if project.is_error() {
        println!("Lookup failed with status {}", project.result_code());
    }
    println!("{}", project.into_value());

    println!("\nFetching organization 219 with investments...");
    let org = client
        .get_organization(OrganizationLookup::new(219).include_investments(true))
        .await;
    println!("{}", org.into_value());

    Ok(())
}
