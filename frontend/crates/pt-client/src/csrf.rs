/// Cookie the server issues the anti-forgery token in
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

/// Header every request carries the token in
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Find the value of cookie `name` in a `Cookie` header.
///
/// The value ends at the next `=`, matching the page script that issued
/// these requests. A missing cookie yields an empty token; the server
/// rejects such requests.
pub fn token_from_cookies(cookie_header: &str, name: &str) -> String {
    cookie_header
        .split(';')
        .map(str::trim)
        .find_map(|pair| {
            pair.split_once('=')
                .filter(|(key, _)| *key == name)
                .and_then(|(_, value)| value.split('=').next())
                .map(str::to_string)
        })
        .unwrap_or_default()
}
