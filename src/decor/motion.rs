pub const FADE_IN_THRESHOLD: f64 = 0.1;
pub const FADE_IN_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const BUTTON_TRANSITION: &str = "all 0.3s cubic-bezier(0.4, 0, 0.2, 1)";
pub const DATE_ANIMATION: &str = "fadeInUp 0.6s ease-out";

pub fn parallax_transform(scroll_y: f64, factor: f64) -> String {
    format!("translateY({}px)", scroll_y * factor)
}

/// Dates get the entrance animation; free text does not.
pub fn date_animation(text: &str) -> Option<&'static str> {
    text.trim()
        .starts_with(|c: char| c.is_ascii_digit())
        .then_some(DATE_ANIMATION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallax_scales_scroll() {
        assert_eq!(parallax_transform(100.0, 0.3), format!("translateY({}px)", 100.0 * 0.3));
        assert_eq!(parallax_transform(0.0, 0.3), "translateY(0px)");
    }

    #[test]
    fn only_numeric_dates_animate() {
        assert_eq!(date_animation("  14 February"), Some(DATE_ANIMATION));
        assert_eq!(date_animation("Saturday"), None);
        assert_eq!(date_animation(""), None);
    }
}
