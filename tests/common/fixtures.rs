//! Test fixtures - reusable SVG sources.

/// 24x24 stroked arrow, the shape of an `outline` icon
pub const ARROW_RIGHT: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor" aria-hidden="true"><path stroke-linecap="round" stroke-linejoin="round" d="M13.5 4.5 21 12m0 0-7.5 7.5M21 12H3"/></svg>"#;

/// Filled 20x20 icon with a fill rule, the shape of a `mini` icon
pub const HOME: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 20" fill="currentColor" aria-hidden="true"><path fill-rule="evenodd" d="M9.293 2.293a1 1 0 0 1 1.414 0l7 7A1 1 0 0 1 17 11h-1v6a1 1 0 0 1-1 1h-2a1 1 0 0 1-1-1v-3a1 1 0 0 0-1-1H9a1 1 0 0 0-1 1v3a1 1 0 0 1-1 1H5a1 1 0 0 1-1-1v-6H3a1 1 0 0 1-.707-1.707l7-7Z" clip-rule="evenodd"/></svg>"#;

/// Icon that ships its own `<title>`
pub const TITLED: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><title>Bell</title><path d="M12 2a7 7 0 0 0-7 7v4l-2 3h18l-2-3V9a7 7 0 0 0-7-7Z"/></svg>"#;

/// Not well-formed: `<path>` is never closed
pub const BROKEN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M0 0"></svg>"#;
