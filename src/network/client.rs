//! HTTP client wrapper - executes the customer REST calls

use std::time::Instant;

use anyhow::{bail, Context, Result};

use crate::messages::NetworkResponse;
use crate::models::{Customer, CustomerDraft};

/// `GET` the customer collection and decode it verbatim
pub async fn fetch_customers(client: &reqwest::Client, url: &str) -> Result<Vec<Customer>> {
    let resp = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(describe_transport_error)?;

    let status = resp.status();
    if !status.is_success() {
        bail!("GET {} returned HTTP {}", url, status.as_u16());
    }

    resp.json::<Vec<Customer>>()
        .await
        .context("Error decoding customer list")
}

/// `POST` a draft as JSON; the response body is not consumed
pub async fn create_customer(
    client: &reqwest::Client,
    url: &str,
    draft: &CustomerDraft,
) -> Result<u16> {
    let resp = client
        .post(url)
        .json(draft)
        .send()
        .await
        .map_err(describe_transport_error)?;

    let status = resp.status();
    if !status.is_success() {
        bail!("POST {} returned HTTP {}", url, status.as_u16());
    }

    Ok(status.as_u16())
}

/// Execute the list call and wrap the outcome for the App layer
pub async fn execute_fetch(client: &reqwest::Client, url: &str, request_id: u64) -> NetworkResponse {
    let start = Instant::now();
    let result = fetch_customers(client, url).await;
    let elapsed = start.elapsed().as_millis() as u64;

    match result {
        Ok(customers) => {
            tracing::info!(id = request_id, count = customers.len(), time_ms = elapsed, "Customer list fetched");
            NetworkResponse::CustomersLoaded {
                id: request_id,
                customers,
            }
        }
        Err(e) => NetworkResponse::LoadFailed {
            id: request_id,
            message: format!("{:#}", e),
        },
    }
}

/// Execute the create call and wrap the outcome for the App layer
pub async fn execute_create(
    client: &reqwest::Client,
    url: &str,
    draft: CustomerDraft,
    request_id: u64,
) -> NetworkResponse {
    let start = Instant::now();
    let result = create_customer(client, url, &draft).await;
    let elapsed = start.elapsed().as_millis() as u64;

    match result {
        Ok(status) => {
            tracing::info!(id = request_id, status, time_ms = elapsed, "Customer create accepted");
            NetworkResponse::CustomerCreated {
                id: request_id,
                status,
            }
        }
        Err(e) => NetworkResponse::CreateFailed {
            id: request_id,
            message: format!("{:#}", e),
        },
    }
}

fn describe_transport_error(e: reqwest::Error) -> anyhow::Error {
    if e.is_connect() {
        anyhow::anyhow!("Connection failed: {}", e)
    } else {
        anyhow::anyhow!("Request failed: {}", e)
    }
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(concat!("customer-desk/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
