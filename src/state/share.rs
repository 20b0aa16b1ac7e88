//! Share links: the build string rides in the `b` query parameter.

use wasm_bindgen::JsValue;

pub const BUILD_PARAM: &str = "b";

fn pairs(search: &str) -> impl Iterator<Item = &str> {
    search
        .strip_prefix('?')
        .unwrap_or(search)
        .split('&')
        .filter(|p| !p.is_empty())
}

fn key_of(pair: &str) -> &str {
    pair.split_once('=').map_or(pair, |(k, _)| k)
}

/// The raw build token, passed on unmodified. A bare `b` yields an empty
/// token so the codec can reject it.
pub fn build_param(search: &str) -> Option<&str> {
    pairs(search)
        .find(|p| key_of(p) == BUILD_PARAM)
        .map(|p| p.split_once('=').map_or("", |(_, v)| v))
}

/// `search` with the build parameter removed, `?`-prefixed or empty.
pub fn without_build_param(search: &str) -> String {
    let rest: Vec<&str> = pairs(search).filter(|p| key_of(p) != BUILD_PARAM).collect();
    if rest.is_empty() {
        String::new()
    } else {
        format!("?{}", rest.join("&"))
    }
}

pub fn share_url(base: &str, payload: &str) -> String {
    format!("{base}?{BUILD_PARAM}={payload}")
}

pub fn location_search() -> Option<String> {
    web_sys::window()?.location().search().ok()
}

/// Origin plus path, without query or fragment.
pub fn base_url() -> Option<String> {
    let location = web_sys::window()?.location();
    Some(format!("{}{}", location.origin().ok()?, location.pathname().ok()?))
}

/// Drops the token from the address bar without reloading.
pub fn strip_build_from_location() {
    let (Some(win), Some(base), Some(search)) = (web_sys::window(), base_url(), location_search())
    else {
        return;
    };
    let url = format!("{base}{}", without_build_param(&search));
    let replaced = win
        .history()
        .and_then(|h| h.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
    if replaced.is_err() {
        tracing::warn!("could not rewrite the address bar");
    }
}
