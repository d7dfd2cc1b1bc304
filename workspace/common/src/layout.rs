//! Size arithmetic for the input box and the scrolling log.
//!
//! The DOM side measures, these functions decide. Heights are CSS pixels.

pub const INPUT_MIN_HEIGHT: f64 = 20.0;
pub const INPUT_MAX_HEIGHT: f64 = 120.0;

/// Used when the input container cannot be measured.
pub const DEFAULT_INPUT_CONTAINER_HEIGHT: f64 = 70.0;
pub const HEADER_HEIGHT: f64 = 60.0;
pub const LOG_PADDING: f64 = 20.0;

/// Textarea height after its text changed.
///
/// `scroll_height` and `client_height` are measured with the textarea reset to
/// [`INPUT_MIN_HEIGHT`]. It only grows when the text wraps or has a newline.
pub fn input_height(text: &str, scroll_height: f64, client_height: f64) -> f64 {
    let needs_resize = scroll_height > client_height || text.contains('\n');
    if needs_resize {
        scroll_height.clamp(INPUT_MIN_HEIGHT, INPUT_MAX_HEIGHT)
    } else {
        INPUT_MIN_HEIGHT
    }
}

/// Pixels the log viewport gives up to the surrounding chrome.
pub fn log_viewport_offset(input_container: Option<f64>, back_button: Option<f64>) -> f64 {
    input_container.unwrap_or(DEFAULT_INPUT_CONTAINER_HEIGHT)
        + HEADER_HEIGHT
        + back_button.unwrap_or(0.0)
        + LOG_PADDING
}

/// CSS height of the log viewport.
pub fn log_viewport_height(input_container: Option<f64>, back_button: Option<f64>) -> String {
    let offset = log_viewport_offset(input_container, back_button);
    format!("calc(100vh - {offset}px)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_stays_minimal() {
        assert_eq!(input_height("short question", 20.0, 20.0), INPUT_MIN_HEIGHT);
    }

    #[test]
    fn test_wrapped_text_grows() {
        assert_eq!(input_height("a long question that wraps", 44.0, 20.0), 44.0);
    }

    #[test]
    fn test_newline_grows_even_without_overflow() {
        assert_eq!(input_height("a\nb", 18.0, 20.0), INPUT_MIN_HEIGHT);
        assert_eq!(input_height("a\nb", 40.0, 40.0), 40.0);
    }

    #[test]
    fn test_growth_is_capped() {
        assert_eq!(input_height("x\n".repeat(30).as_str(), 600.0, 20.0), INPUT_MAX_HEIGHT);
    }

    #[test]
    fn test_log_viewport_height() {
        assert_eq!(log_viewport_height(None, None), "calc(100vh - 150px)");
        assert_eq!(log_viewport_height(Some(90.0), Some(36.0)), "calc(100vh - 206px)");
    }
}
