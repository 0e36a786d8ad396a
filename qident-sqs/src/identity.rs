//! SQS queue identity: URL and ARN forms plus queue attributes

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

use qident_core::{AccountRegionKey, FormatError, ParseError};

use crate::attributes::{humanize_key, FormatRule};

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://sqs\.([-a-z0-9]+)\.amazonaws\.com/([0-9]+)/(.+)$")
        .expect("queue URL pattern is valid")
});

static ARN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^arn:aws:sqs:([-a-z0-9]+):([0-9]+):(.+)$").expect("queue ARN pattern is valid")
});

/// Identity of a single SQS queue
///
/// Region, account number and name are fixed at construction; the attribute
/// map can only be replaced as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueIdentity {
    region: String,
    account_number: String,
    name: String,
    #[serde(default)]
    attributes: BTreeMap<String, String>,
}

impl QueueIdentity {
    pub fn from_parts(
        region: impl Into<String>,
        account_number: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            region: region.into(),
            account_number: account_number.into(),
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Parse `https://sqs.<region>.amazonaws.com/<account>/<name>`
    pub fn from_url(url: &str) -> Result<Self, ParseError> {
        let Some((region, account, name)) = match_parts(&URL_PATTERN, url) else {
            debug!(url = %url, "Input is not a queue URL");
            return Err(ParseError::MalformedUrl(url.to_string()));
        };
        Ok(Self::from_parts(region, account, name))
    }

    /// Parse `arn:aws:sqs:<region>:<account>:<name>`
    pub fn from_arn(arn: &str) -> Result<Self, ParseError> {
        let Some((region, account, name)) = match_parts(&ARN_PATTERN, arn) else {
            debug!(arn = %arn, "Input is not a queue ARN");
            return Err(ParseError::MalformedArn(arn.to_string()));
        };
        Ok(Self::from_parts(region, account, name))
    }

    /// Parse either form, choosing by the `arn:` prefix
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let input = input.trim();
        if input.starts_with("arn:") {
            Self::from_arn(input)
        } else {
            Self::from_url(input)
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    pub fn url(&self) -> String {
        format!(
            "https://sqs.{}.amazonaws.com/{}/{}",
            self.region, self.account_number, self.name
        )
    }

    pub fn arn(&self) -> String {
        format!(
            "arn:aws:sqs:{}:{}:{}",
            self.region, self.account_number, self.name
        )
    }

    pub fn account_region_key(&self) -> AccountRegionKey {
        AccountRegionKey::new(&self.account_number, &self.region)
    }

    /// Replace all attributes, consuming and returning the identity
    #[must_use]
    pub fn with_attributes<I, K, V>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.set_attributes(attributes);
        self
    }

    /// Replace all attributes in place
    pub fn set_attributes<I, K, V>(&mut self, attributes: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.attributes = attributes
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Attributes keyed by display name with display values
    ///
    /// Fails on the first value its rule cannot render, such as a
    /// non-numeric `MessageRetentionPeriod`. When two names split to the
    /// same display name, the one that sorts last wins and a warning is
    /// logged.
    pub fn human_readable_attributes(&self) -> Result<BTreeMap<String, String>, FormatError> {
        let mut display = BTreeMap::new();
        for (name, value) in &self.attributes {
            let rendered = FormatRule::for_attribute(name).apply(name, value)?;
            self.insert_display(&mut display, name, rendered);
        }
        Ok(display)
    }

    /// Like [`Self::human_readable_attributes`], but values that cannot be
    /// rendered are shown raw
    pub fn human_readable_attributes_lossy(&self) -> BTreeMap<String, String> {
        let mut display = BTreeMap::new();
        for (name, value) in &self.attributes {
            let rendered = FormatRule::for_attribute(name)
                .apply(name, value)
                .unwrap_or_else(|e| {
                    warn!(queue = %self.name, error = %e, "Showing raw attribute value");
                    value.clone()
                });
            self.insert_display(&mut display, name, rendered);
        }
        display
    }

    fn insert_display(&self, display: &mut BTreeMap<String, String>, name: &str, rendered: String) {
        let key = humanize_key(name);
        if let Some(previous) = display.insert(key.clone(), rendered) {
            warn!(
                queue = %self.name,
                attribute = %name,
                display_name = %key,
                dropped = %previous,
                "Attribute display name collides with another attribute"
            );
        }
    }
}

fn match_parts<'a>(pattern: &Regex, input: &'a str) -> Option<(&'a str, &'a str, &'a str)> {
    let caps = pattern.captures(input)?;
    Some((
        caps.get(1)?.as_str(),
        caps.get(2)?.as_str(),
        caps.get(3)?.as_str(),
    ))
}

impl FromStr for QueueIdentity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for QueueIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.arn())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{CREATED_TIMESTAMP, MESSAGE_RETENTION_PERIOD, VISIBILITY_TIMEOUT};
    use qident_core::Region;

    fn identity() -> QueueIdentity {
        QueueIdentity::from_parts("us-east-1", "123456789012", "orders")
    }

    #[test]
    fn test_url_and_arn() {
        let queue = identity();
        assert_eq!(
            queue.url(),
            "https://sqs.us-east-1.amazonaws.com/123456789012/orders"
        );
        assert_eq!(queue.arn(), "arn:aws:sqs:us-east-1:123456789012:orders");
        assert_eq!(queue.to_string(), queue.arn());
    }

    #[test]
    fn test_from_parts_with_region_enum() {
        let queue = QueueIdentity::from_parts(Region::EuWest2, "000000000000", "jobs");
        assert_eq!(queue.region(), "eu-west-2");
    }

    #[test]
    fn test_from_url() {
        let queue =
            QueueIdentity::from_url("https://sqs.ap-southeast-2.amazonaws.com/000123/dead-letters")
                .unwrap();
        assert_eq!(queue.region(), "ap-southeast-2");
        assert_eq!(queue.account_number(), "000123");
        assert_eq!(queue.name(), "dead-letters");
        assert!(queue.attributes().is_empty());
    }

    #[test]
    fn test_from_url_rejects_other_shapes() {
        for input in [
            "not a url",
            "http://sqs.us-east-1.amazonaws.com/123/q",
            "https://sqs.us-east-1.amazonaws.com/abc/q",
            "https://sqs.US-EAST-1.amazonaws.com/123/q",
            "https://sqs.us-east-1.amazonaws.com/123/",
            "prefix https://sqs.us-east-1.amazonaws.com/123/q",
        ] {
            assert_eq!(
                QueueIdentity::from_url(input),
                Err(ParseError::MalformedUrl(input.to_string())),
                "{}",
                input
            );
        }
    }

    #[test]
    fn test_from_arn() {
        let queue = QueueIdentity::from_arn("arn:aws:sqs:us-west-2:42:events.fifo").unwrap();
        assert_eq!(queue.region(), "us-west-2");
        assert_eq!(queue.account_number(), "42");
        assert_eq!(queue.name(), "events.fifo");
    }

    #[test]
    fn test_from_arn_rejects_other_shapes() {
        for input in [
            "not an arn",
            "arn:aws:sns:us-east-1:123:topic",
            "arn:aws:sqs:us-east-1:12a:q",
            "arn:aws:sqs:us-east-1:123:",
        ] {
            assert_eq!(
                QueueIdentity::from_arn(input),
                Err(ParseError::MalformedArn(input.to_string()))
            );
        }
    }

    #[test]
    fn test_parse_dispatches_on_prefix() {
        let from_arn: QueueIdentity = "arn:aws:sqs:us-east-1:123456789012:orders"
            .parse()
            .unwrap();
        let from_url: QueueIdentity = " https://sqs.us-east-1.amazonaws.com/123456789012/orders\n"
            .parse()
            .unwrap();

        assert_eq!(from_arn, identity());
        assert_eq!(from_url, identity());
        assert!(matches!(
            QueueIdentity::parse("arn:oops"),
            Err(ParseError::MalformedArn(_))
        ));
        assert!(matches!(
            QueueIdentity::parse("oops"),
            Err(ParseError::MalformedUrl(_))
        ));
    }

    #[test]
    fn test_with_attributes_replaces() {
        let queue = identity()
            .with_attributes([("A", "1")])
            .with_attributes([("B", "2")]);

        assert_eq!(queue.attributes().len(), 1);
        assert_eq!(queue.attributes().get("B").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_set_attributes_in_place() {
        let mut queue = identity().with_attributes([("A", "1"), ("C", "3")]);
        queue.set_attributes(Vec::<(String, String)>::new());
        assert!(queue.attributes().is_empty());
    }

    #[test]
    fn test_human_readable_attributes() {
        let queue = identity().with_attributes([
            (VISIBILITY_TIMEOUT, "30"),
            ("MaximumMessageSize", "65536"),
            (CREATED_TIMESTAMP, "1400000000"),
            ("CustomAttr", "hello"),
        ]);

        let display = queue.human_readable_attributes().unwrap();
        assert_eq!(display["Visibility Timeout"], "30 seconds");
        assert_eq!(display["Maximum Message Size"], "65536 bytes");
        assert_eq!(display["Created Timestamp"], "2014-05-13 16:53:20 UTC");
        assert_eq!(display["Custom Attr"], "hello");
    }

    #[test]
    fn test_human_readable_attributes_strict_vs_lossy() {
        let queue = identity().with_attributes([
            (MESSAGE_RETENTION_PERIOD, "soon"),
            (VISIBILITY_TIMEOUT, "30"),
        ]);

        let err = queue.human_readable_attributes().unwrap_err();
        assert!(matches!(
            err,
            FormatError::NotAnInteger { ref attribute, .. } if attribute == MESSAGE_RETENTION_PERIOD
        ));

        let display = queue.human_readable_attributes_lossy();
        assert_eq!(display["Message Retention Period"], "soon");
        assert_eq!(display["Visibility Timeout"], "30 seconds");
    }

    #[test]
    fn test_colliding_display_names_keep_last_sorted() {
        let queue =
            identity().with_attributes([(VISIBILITY_TIMEOUT, "30"), ("Visibility Timeout", "x")]);

        // "Visibility Timeout" sorts before "VisibilityTimeout"
        let display = queue.human_readable_attributes().unwrap();
        assert_eq!(display.len(), 1);
        assert_eq!(display["Visibility Timeout"], "30 seconds");
        assert_eq!(queue.human_readable_attributes_lossy(), display);
    }

    #[test]
    fn test_account_region_key() {
        let key = identity().account_region_key();
        assert_eq!(key, AccountRegionKey::new("123456789012", "us-east-1"));
    }

    #[test]
    fn test_serde_round_trip() {
        let queue = identity().with_attributes([(VISIBILITY_TIMEOUT, "30")]);
        let json = serde_json::to_string(&queue).unwrap();
        let back: QueueIdentity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, queue);

        let bare: QueueIdentity = serde_json::from_str(
            r#"{"region":"us-east-1","account_number":"123456789012","name":"orders"}"#,
        )
        .unwrap();
        assert_eq!(bare, identity());
    }
}
