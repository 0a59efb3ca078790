use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, REFERER, UPGRADE_INSECURE_REQUESTS,
    USER_AGENT,
};

use crate::fetch::FetchError;

pub const DEFAULT_DESKTOP_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";
pub const DEFAULT_MOBILE_USER_AGENT: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_5 like Mac OS X) \
     AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.5 Mobile/15E148 Safari/604.1";
pub const DEFAULT_REFERER: &str = "https://www.google.com/";

/// Which browser a request pretends to come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    Desktop,
    Mobile,
}

/// User agents and referer sent with every request.
#[derive(Debug, Clone)]
pub struct PersonaHeaders {
    pub desktop_user_agent: String,
    pub mobile_user_agent: String,
    pub referer: String,
}

impl Default for PersonaHeaders {
    fn default() -> Self {
        PersonaHeaders {
            desktop_user_agent: DEFAULT_DESKTOP_USER_AGENT.to_string(),
            mobile_user_agent: DEFAULT_MOBILE_USER_AGENT.to_string(),
            referer: DEFAULT_REFERER.to_string(),
        }
    }
}

impl PersonaHeaders {
    /// Creates the header set for a persona.
    pub fn create_headers(&self, persona: Persona) -> Result<HeaderMap, FetchError> {
        let user_agent = match persona {
            Persona::Desktop => &self.desktop_user_agent,
            Persona::Mobile => &self.mobile_user_agent,
        };

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, header_value(user_agent)?);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers.insert(REFERER, header_value(&self.referer)?);
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));

        Ok(headers)
    }
}

fn header_value(value: &str) -> Result<HeaderValue, FetchError> {
    HeaderValue::from_str(value).map_err(|_| FetchError::InvalidHeader(value.to_string()))
}
