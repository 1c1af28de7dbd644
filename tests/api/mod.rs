mod batch;
mod history;
mod legacy;

use calc_cli::api::{CalculatorClient, MonitoringConfig};
use wiremock::MockServer;

pub const PREFIX: &str = "/calculadora-fast-api";

pub fn client(server: &MockServer) -> CalculatorClient {
    CalculatorClient::with_custom_client(
        &format!("{}{}", server.uri(), PREFIX),
        reqwest::Client::new(),
        MonitoringConfig::disabled(),
    )
}
