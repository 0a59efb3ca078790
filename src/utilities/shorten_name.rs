/// Keeps the part of a product name before the first comma.
///
/// Retailers append size or colour after a comma ("Widget, Blue, Large"),
/// only the leading part is kept.
pub fn shorten_name(text: &str) -> String {
    text.split(',').next().unwrap_or_default().trim().to_string()
}
