use chrono::NaiveDate;

/// Fields captured from one line of the combined log format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFields {
    pub remote_address: String,
    pub remote_user: String,
    pub date: NaiveDate,
    pub request_line: String,
    pub status: u16,
    pub body_bytes_sent: u64,
    pub http_referer: String,
    pub http_user_agent: String,
}

/// One parsed log entry.
///
/// The requested resource and protocol are derived from the request line when the
/// record is built and can't drift from it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    fields: LogFields,
    request_resource: String,
    request_protocol: Option<String>,
}

impl LogRecord {
    pub fn fields(&self) -> &LogFields {
        &self.fields
    }

    pub fn remote_address(&self) -> &str {
        &self.fields.remote_address
    }

    pub fn remote_user(&self) -> &str {
        &self.fields.remote_user
    }

    pub fn date(&self) -> NaiveDate {
        self.fields.date
    }

    pub fn request_line(&self) -> &str {
        &self.fields.request_line
    }

    pub fn status(&self) -> u16 {
        self.fields.status
    }

    pub fn body_bytes_sent(&self) -> u64 {
        self.fields.body_bytes_sent
    }

    pub fn http_referer(&self) -> &str {
        &self.fields.http_referer
    }

    pub fn http_user_agent(&self) -> &str {
        &self.fields.http_user_agent
    }

    /// Second token of the request line (`GET /index.html HTTP/1.1` -> `/index.html`).
    pub fn request_resource(&self) -> &str {
        &self.request_resource
    }

    pub fn request_protocol(&self) -> Option<&str> {
        self.request_protocol.as_deref()
    }
}

impl From<LogFields> for LogRecord {
    fn from(fields: LogFields) -> Self {
        let request_resource = request_resource(&fields.request_line);
        let request_protocol = request_protocol(&fields.request_line);

        Self {
            fields,
            request_resource,
            request_protocol,
        }
    }
}

fn request_resource(request: &str) -> String {
    if request.trim().is_empty() {
        return String::new();
    }

    let mut tokens = request.split_whitespace();
    match tokens.nth(1) {
        Some(resource) => resource.to_string(),
        // A lone token ("GET") stands in for the resource.
        None => request.to_string(),
    }
}

fn request_protocol(request: &str) -> Option<String> {
    request.split_whitespace().nth(2).map(str::to_string)
}
