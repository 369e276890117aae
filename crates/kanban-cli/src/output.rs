use kanban_client::SyncOutcome;
use serde::Serialize;

#[derive(Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    pub api_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct ListResponse<T: Serialize> {
    pub items: Vec<T>,
    pub count: usize,
}

/// Result of a write the server may not have needed
#[derive(Serialize)]
pub struct ChangeResponse {
    pub id: i64,
    pub changed: bool,
}

fn render<T: Serialize>(response: &CliResponse<T>) -> String {
    serde_json::to_string(response)
        .unwrap_or_else(|e| format!(r#"{{"success":false,"error":"{e}"}}"#))
}

pub fn output_success<T: Serialize>(data: T) {
    let response = CliResponse {
        success: true,
        api_version: env!("CARGO_PKG_VERSION"),
        data: Some(data),
        error: None,
    };
    println!("{}", render(&response));
}

pub fn output_list<T: Serialize>(items: Vec<T>) {
    let count = items.len();
    let list = ListResponse { items, count };
    output_success(list);
}

/// Reports an optimistic write. A failed sync exits like any other error.
pub fn output_sync(id: i64, outcome: SyncOutcome) {
    match outcome {
        SyncOutcome::Unchanged => output_success(ChangeResponse { id, changed: false }),
        SyncOutcome::Confirmed => output_success(ChangeResponse { id, changed: true }),
        SyncOutcome::Failed(message) => output_error(&message),
    }
}

/// Prints an error envelope to stderr and exits with code 1.
pub fn output_error(message: &str) -> ! {
    let response: CliResponse<()> = CliResponse {
        success: false,
        api_version: env!("CARGO_PKG_VERSION"),
        data: None,
        error: Some(message.to_string()),
    };
    eprintln!("{}", render(&response));
    std::process::exit(1);
}
