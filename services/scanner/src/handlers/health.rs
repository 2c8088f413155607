/// Health probe for the hosting platform.
pub async fn health() -> &'static str {
    "Accessibility Testing API is running"
}
