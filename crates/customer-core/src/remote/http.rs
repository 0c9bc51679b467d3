//! HTTP Customer Accessor
//!
//! Maps the accessor contract onto the `/customers` REST routes.

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::{CustomerAccessor, RemoteResult};
use crate::config::ClientConfig;
use crate::domain::{Customer, CustomerId};

/// Talks to the customer REST API with `reqwest`
#[derive(Debug, Clone)]
pub struct HttpCustomerAccessor {
    client: Client,
    config: ClientConfig,
}

impl HttpCustomerAccessor {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Use a preconfigured client (custom headers, timeouts on native)
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }
}

/// Reject non-2xx statuses, then decode the JSON body
async fn read_json<T: DeserializeOwned>(response: Response) -> RemoteResult<T> {
    let response = response.error_for_status()?;
    Ok(response.json::<T>().await?)
}

#[async_trait(?Send)]
impl CustomerAccessor for HttpCustomerAccessor {
    async fn list(&self) -> RemoteResult<Vec<Customer>> {
        let url = self.config.customers_url();
        debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        read_json(response).await
    }

    async fn fetch(&self, id: CustomerId) -> RemoteResult<Customer> {
        let url = self.config.customer_url(id);
        debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        read_json(response).await
    }

    async fn create(&self, draft: &Customer) -> RemoteResult<Customer> {
        let url = self.config.customers_url();
        debug!("POST {url}");
        let response = self.client.post(url).json(draft).send().await?;
        read_json(response).await
    }

    async fn update(&self, id: CustomerId, customer: &Customer) -> RemoteResult<Customer> {
        let url = self.config.customer_url(id);
        debug!("PUT {url}");
        let response = self.client.put(url).json(customer).send().await?;
        read_json(response).await
    }

    async fn delete(&self, id: CustomerId) -> RemoteResult<()> {
        let url = self.config.customer_url(id);
        debug!("DELETE {url}");
        // Body is ignored; any 2xx counts as acknowledgement
        self.client.delete(url).send().await?.error_for_status()?;
        Ok(())
    }
}
