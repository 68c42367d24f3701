const MOBILE_AGENTS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Constrained viewports get fewer particles and a slower carousel.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub fn is_mobile(user_agent: &str, viewport_width: f64, breakpoint: f64) -> bool {
    let agent = user_agent.to_ascii_lowercase();
    MOBILE_AGENTS.iter().any(|token| agent.contains(token)) || viewport_width <= breakpoint
}

#[cfg(target_arch = "wasm32")]
pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|win| win.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

#[cfg(target_arch = "wasm32")]
pub fn detect_mobile(breakpoint: f64) -> bool {
    let agent = web_sys::window()
        .and_then(|win| win.navigator().user_agent().ok())
        .unwrap_or_default();
    is_mobile(&agent, viewport_width(), breakpoint)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn detect_mobile(_breakpoint: f64) -> bool {
    false
}
