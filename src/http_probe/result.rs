use std::fmt;

/// Coarse classification of a probe outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Online,
    Redirect,
    ClientError,
    ServerError,
    Offline,
}

impl Category {
    /// Maps an HTTP status code onto its category band.
    /// Anything outside 200-499 lands in `ServerError`, including 1xx and codes above 599.
    pub fn from_status(code: u16) -> Self {
        match code {
            200..=299 => Category::Online,
            300..=399 => Category::Redirect,
            400..=499 => Category::ClientError,
            _ => Category::ServerError,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Online => "ONLINE",
            Category::Redirect => "REDIRECT",
            Category::ClientError => "CLIENT ERROR",
            Category::ServerError => "SERVER ERROR",
            Category::Offline => "OFFLINE",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Online => "🟢",
            Category::Redirect => "🟡",
            Category::ClientError | Category::ServerError | Category::Offline => "🔴",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Category::ClientError | Category::ServerError)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon(), self.label())
    }
}

/// What a single request produced. A status code always comes with a response time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Responded { status_code: u16, response_time_ms: f64 },
    Unreachable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    /// The target as supplied by the caller.
    pub target: String,
    /// The absolute URL that was requested.
    pub url: String,
    pub outcome: Outcome,
}

impl ProbeResult {
    pub fn responded(target: &str, url: &str, status_code: u16, response_time_ms: f64) -> Self {
        Self {
            target: target.to_string(),
            url: url.to_string(),
            outcome: Outcome::Responded {
                status_code,
                response_time_ms,
            },
        }
    }

    pub fn unreachable(target: &str, url: &str) -> Self {
        Self {
            target: target.to_string(),
            url: url.to_string(),
            outcome: Outcome::Unreachable,
        }
    }

    pub fn category(&self) -> Category {
        match self.outcome {
            Outcome::Responded { status_code, .. } => Category::from_status(status_code),
            Outcome::Unreachable => Category::Offline,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self.outcome {
            Outcome::Responded { status_code, .. } => Some(status_code),
            Outcome::Unreachable => None,
        }
    }

    pub fn response_time_ms(&self) -> Option<f64> {
        match self.outcome {
            Outcome::Responded {
                response_time_ms, ..
            } => Some(response_time_ms),
            Outcome::Unreachable => None,
        }
    }

    /// Status code for display, `N/A` when the target was unreachable.
    pub fn code_text(&self) -> String {
        self.status_code()
            .map(|code| code.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// Response time for display, `N/A` when the target was unreachable.
    pub fn response_time_text(&self) -> String {
        self.response_time_ms()
            .map(|ms| format!("{ms:.2} ms"))
            .unwrap_or_else(|| "N/A".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_boundaries() {
        let cases = [
            (200, Category::Online),
            (299, Category::Online),
            (300, Category::Redirect),
            (399, Category::Redirect),
            (400, Category::ClientError),
            (499, Category::ClientError),
            (500, Category::ServerError),
            (599, Category::ServerError),
        ];
        for (code, expected) in cases {
            assert_eq!(Category::from_status(code), expected, "code {code}");
        }
    }

    #[test]
    fn test_codes_outside_known_bands_fall_through_to_server_error() {
        assert_eq!(Category::from_status(102), Category::ServerError);
        assert_eq!(Category::from_status(999), Category::ServerError);
    }

    #[test]
    fn test_code_and_time_are_present_together() {
        let ok = ProbeResult::responded("example.com", "https://example.com", 204, 12.5);
        assert_eq!(ok.status_code(), Some(204));
        assert_eq!(ok.response_time_ms(), Some(12.5));
        assert_eq!(ok.category(), Category::Online);

        let down = ProbeResult::unreachable("example.invalid", "https://example.invalid");
        assert_eq!(down.status_code(), None);
        assert_eq!(down.response_time_ms(), None);
        assert_eq!(down.category(), Category::Offline);
    }

    #[test]
    fn test_display_texts() {
        let ok = ProbeResult::responded("a", "https://a", 404, 50.0);
        assert_eq!(ok.code_text(), "404");
        assert_eq!(ok.response_time_text(), "50.00 ms");
        assert_eq!(ok.category().to_string(), "🔴 CLIENT ERROR");

        let down = ProbeResult::unreachable("b", "https://b");
        assert_eq!(down.code_text(), "N/A");
        assert_eq!(down.response_time_text(), "N/A");
    }

    #[test]
    fn test_error_categories() {
        assert!(Category::ClientError.is_error());
        assert!(Category::ServerError.is_error());
        assert!(!Category::Offline.is_error());
        assert!(!Category::Redirect.is_error());
        assert!(!Category::Online.is_error());
    }
}
