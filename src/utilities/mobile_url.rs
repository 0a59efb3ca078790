use url::Url;

/// Rewrites a product URL onto the retailer's mobile host (`www.` becomes `m.`).
/// Hosts without `www.` get `m.` prepended. Returns `None` for unparseable URLs.
pub fn mobile_url(url: &str) -> Option<String> {
    let mut parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?.to_string();

    let mobile_host = if let Some(rest) = host.strip_prefix("www.") {
        format!("m.{}", rest)
    } else if host.starts_with("m.") {
        host.clone()
    } else {
        format!("m.{}", host)
    };

    parsed.set_host(Some(&mobile_host)).ok()?;
    Some(parsed.to_string())
}
