//! Subcommand implementations
//!
//! Each command produces the text written to stdout so it can be tested
//! without a terminal.

use anyhow::{bail, Context};
use serde::Serialize;
use tracing::{debug, info, warn};

use qident_core::error::{to_json, ErrorCode};
use qident_sqs::{FormatError, ParseError, QueueIdentity, Region};

use crate::config::{DefaultsConfig, OutputFormat};

#[derive(Serialize)]
struct IdentityView<'a> {
    region: &'a str,
    account_number: &'a str,
    name: &'a str,
    url: String,
    arn: String,
}

impl<'a> From<&'a QueueIdentity> for IdentityView<'a> {
    fn from(queue: &'a QueueIdentity) -> Self {
        Self {
            region: queue.region(),
            account_number: queue.account_number(),
            name: queue.name(),
            url: queue.url(),
            arn: queue.arn(),
        }
    }
}

/// Build an identity from parts, falling back to configured defaults
pub fn from_parts(
    region: Option<&str>,
    account: Option<&str>,
    name: &str,
    defaults: &DefaultsConfig,
) -> anyhow::Result<QueueIdentity> {
    let region = region.unwrap_or(defaults.region.as_str());
    let Some(account) = account.or(defaults.account.as_deref()) else {
        bail!("No account number given; pass --account or set defaults.account");
    };
    if account.is_empty() || !account.bytes().all(|b| b.is_ascii_digit()) {
        bail!("Account number must be numeric: {:?}", account);
    }
    if region.is_empty()
        || !region
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    {
        bail!(
            "Region must be lowercase letters, digits and '-': {:?}",
            region
        );
    }
    if name.is_empty() || name.chars().any(|c| c.is_whitespace() || c.is_control()) {
        bail!("Queue name must be non-empty without whitespace: {:?}", name);
    }
    if !Region::from(region).is_known() {
        warn!(region = %region, "Region is not in the known region table");
    }

    debug!(region = %region, account = %account, name = %name, "Building queue identity");
    Ok(QueueIdentity::from_parts(region, account, name))
}

pub fn parse(input: &str) -> anyhow::Result<QueueIdentity> {
    let queue = QueueIdentity::parse(input)?;
    info!(arn = %queue, "Parsed queue identity");
    Ok(queue)
}

pub fn render_identity(queue: &QueueIdentity, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "Region: {}\nAccount: {}\nName: {}\nURL: {}\nARN: {}",
            queue.region(),
            queue.account_number(),
            queue.name(),
            queue.url(),
            queue.arn()
        )),
        OutputFormat::Json => serde_json::to_string_pretty(&IdentityView::from(queue))
            .context("Failed to serialize queue identity"),
    }
}

pub fn render_attributes(queue: &QueueIdentity, format: OutputFormat) -> anyhow::Result<String> {
    let attributes = queue.human_readable_attributes_lossy();

    match format {
        OutputFormat::Text => {
            let mut lines = vec![format!("Queue: {}", queue.arn())];
            lines.extend(attributes.iter().map(|(k, v)| format!("{}: {}", k, v)));
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "arn": queue.arn(),
            "attributes": attributes,
        }))
        .context("Failed to serialize queue attributes"),
    }
}

/// JSON error body for any command failure
pub fn error_json(error: &anyhow::Error) -> String {
    let code = if let Some(e) = error.downcast_ref::<ParseError>() {
        e.code()
    } else if let Some(e) = error.downcast_ref::<FormatError>() {
        e.code()
    } else {
        ErrorCode::InvalidParameterValue
    };
    to_json(code, &format!("{:#}", error))
}

/// Parse a `Key=Value` attribute argument
pub fn parse_attribute(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected Key=Value, got {:?}", arg)),
    }
}
