//! Small browser/native seams: blocking confirm dialog and today's date.

/// Native confirm dialog. Destructive actions go through this before any
/// request is sent.
#[cfg(target_arch = "wasm32")]
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

/// Outside the browser there is no dialog to show; answer yes so flows stay
/// exercisable.
#[cfg(not(target_arch = "wasm32"))]
pub fn confirm(_message: &str) -> bool {
    true
}

/// Today's local date as an ISO `YYYY-MM-DD` string, the format the backend
/// uses for every date field.
#[cfg(target_arch = "wasm32")]
pub fn today() -> String {
    let iso = String::from(js_sys::Date::new_0().to_iso_string());
    iso.chars().take(10).collect()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_is_iso_date() {
        let today = today();
        assert_eq!(today.len(), 10);
        assert_eq!(today.as_bytes()[4], b'-');
        assert_eq!(today.as_bytes()[7], b'-');
    }
}
