/// Integration tests for calc-cli
///
/// Tests are organized into logical groupings:
/// - api: HTTP client against a mock calculator service
/// - session: reducer runtime scenarios, against a fake service and end to end
mod api;
mod session;
