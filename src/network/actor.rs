//! Network actor - runs the customer REST calls in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::config::Config;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, execute_create, execute_fetch};

/// Network actor that processes customer commands
pub struct NetworkActor {
    client: reqwest::Client,
    customers_url: String,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(config: &Config, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client: create_client(),
            customers_url: config.customers_url(),
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                // Handle incoming commands
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchCustomers { id }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let url = self.customers_url.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, url = %url, "Fetching customers");
                                let result = execute_fetch(&client, &url, id).await;
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::CreateCustomer { id, draft }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let url = self.customers_url.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, url = %url, "Creating customer");
                                let result = execute_create(&client, &url, draft, id).await;
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            self.active_requests.abort_all();
                            break;
                        }
                    }
                }

                // Clean up completed tasks
                Some(result) = self.active_requests.join_next() => {
                    if let Err(e) = result {
                        tracing::error!(error = %e, "Network task panicked");
                    }
                }
            }
        }
    }
}
