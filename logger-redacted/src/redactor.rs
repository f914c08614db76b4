use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    #[allow(clippy::unwrap_used)]
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();
    // Local ten digit numbers, optionally grouped 3-3-4
    #[allow(clippy::unwrap_used)]
    static ref PHONE_REGEX: Regex =
        Regex::new(r"\b\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}\b").unwrap();
}

/// PII redaction configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedactionConfig {
    pub redact_emails: bool,
    pub redact_phones: bool,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            redact_emails: true,
            redact_phones: true,
        }
    }
}

/// PII redactor for free-text log messages
pub struct PiiRedactor {
    config: RedactionConfig,
}

impl PiiRedactor {
    pub fn new(config: RedactionConfig) -> Self {
        Self { config }
    }

    pub fn redact(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.config.redact_emails {
            result = self.redact_emails(&result);
        }

        if self.config.redact_phones {
            result = self.redact_phones(&result);
        }

        result
    }

    fn redact_emails(&self, text: &str) -> String {
        EMAIL_REGEX
            .replace_all(text, |caps: &regex::Captures| {
                let email = caps.get(0).map_or("", |m| m.as_str());
                match email.split_once('@') {
                    Some((local, domain)) => {
                        format!("{}***@{}***", first_char(local), first_char(domain))
                    }
                    None => "***@***".to_string(),
                }
            })
            .to_string()
    }

    fn redact_phones(&self, text: &str) -> String {
        PHONE_REGEX.replace_all(text, "***-***-****").to_string()
    }
}

impl Default for PiiRedactor {
    fn default() -> Self {
        Self::new(RedactionConfig::default())
    }
}

/// Replace every character except the last `keep` with `*`.
pub fn mask_tail(value: &str, keep: usize) -> String {
    let count = value.chars().count();
    if count <= keep {
        return "*".repeat(count);
    }
    let hidden = count - keep;
    value
        .chars()
        .enumerate()
        .map(|(i, c)| if i < hidden { '*' } else { c })
        .collect()
}

fn first_char(value: &str) -> String {
    value.chars().next().map(String::from).unwrap_or_default()
}
