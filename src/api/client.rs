use super::constants::{self, methods};
use super::logging::{ApiLogger, MonitoringConfig, OperationContext};
use super::operations::{BatchResponseParser, ErrorBody, OperationOutcome, Operations};
use super::query::{HistoryEntry, HistoryProjection, HistoryResponse, SumResponse};
use super::service::CalculatorApi;
use crate::config::ServerConfig;
use crate::error::CalcError;
use anyhow::Context;
use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client for the calculator service with connection pooling
#[derive(Debug, Clone)]
pub struct CalculatorClient {
    base_url: String,
    http_client: reqwest::Client,
    logger: ApiLogger,
}

impl CalculatorClient {
    pub fn new(server: &ServerConfig, monitoring: MonitoringConfig) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(Duration::from_secs(server.timeout_secs))
            .connect_timeout(Duration::from_secs(server.connect_timeout_secs))
            .user_agent(constants::USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self::with_custom_client(&server.base_url, http_client, monitoring))
    }

    /// Create a client around an existing HTTP client configuration
    pub fn with_custom_client(base_url: &str, http_client: reqwest::Client, monitoring: MonitoringConfig) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
            logger: ApiLogger::new(monitoring),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request and return the body of a 2xx response.
    ///
    /// Non-2xx responses become transport errors carrying the server's
    /// `detail` when it sent one.
    async fn send(&self, request: reqwest::RequestBuilder, context: &OperationContext) -> Result<String, CalcError> {
        let response = request.send().await?;
        let status = response.status();
        self.logger.log_response(context, status.as_u16());

        let body = response.text().await?;
        if !status.is_success() {
            debug!("Error body from {}: {}", context.operation_type, body);
            return Err(CalcError::http_status(status.as_u16(), ErrorBody::detail_from(&body)));
        }
        Ok(body)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
        context: &OperationContext,
    ) -> Result<T, CalcError> {
        self.logger.log_request(context, methods::GET, url);
        let body = self.send(self.http_client.get(url).query(params), context).await?;
        serde_json::from_str(&body).map_err(|e| {
            CalcError::transport(format!("malformed {} response: {}", context.operation_type, e))
        })
    }

    fn finish<T>(&self, context: &OperationContext, result: &Result<T, CalcError>) {
        match result {
            Ok(_) => self.logger.complete_operation(context, None),
            Err(e) => self.logger.complete_operation(context, Some(&e.to_string())),
        }
    }
}

#[async_trait]
impl CalculatorApi for CalculatorClient {
    async fn execute_batch(&self, operations: &Operations) -> Result<Vec<OperationOutcome>, CalcError> {
        if operations.is_empty() {
            return Ok(Vec::new());
        }

        let context = self.logger.start_operation("batch");
        let url = constants::batch_endpoint(&self.base_url);
        self.logger.log_request(&context, methods::POST, &url);

        let request = self.http_client.post(&url).json(&operations.to_wire());
        let result = match self.send(request, &context).await {
            Ok(body) => BatchResponseParser::parse_body(operations.operations(), &body),
            Err(e) => Err(e),
        };

        if let Ok(outcomes) = &result {
            let success_count = outcomes.iter().filter(|o| o.is_success()).count();
            self.logger.log_batch_operation(&context, outcomes.len(), success_count);
        }
        self.finish(&context, &result);
        result
    }

    async fn fetch_history(&self, projection: &HistoryProjection) -> Result<Vec<HistoryEntry>, CalcError> {
        let context = self.logger.start_operation("history");
        let url = constants::history_endpoint(&self.base_url);
        let params: Vec<(&str, String)> = projection
            .to_query_params()
            .into_iter()
            .map(|(key, value)| (key, value.to_string()))
            .collect();

        let result = self
            .get_json::<HistoryResponse>(&url, &params, &context)
            .await
            .map(|response| response.history);

        self.finish(&context, &result);
        result
    }

    async fn sum_pair(&self, a: f64, b: f64) -> Result<f64, CalcError> {
        let context = self.logger.start_operation("sum");
        let url = constants::sum_endpoint(&self.base_url);
        let params = [("a", a.to_string()), ("b", b.to_string())];

        let result = self
            .get_json::<SumResponse>(&url, &params, &context)
            .await
            .map(|response| response.result);

        self.finish(&context, &result);
        result
    }
}
