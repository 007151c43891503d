//! Static markup shared by the exported fragment and the preview.

/// Path data of the square brand mark shown in the signature's icon cell.
pub const LOGO_MARK_PATH: &str = "M21.3031 13.3992C21.2031 13.0992 20.9031 12.8992 20.5031 12.8992H5.00312C4.70312 12.8992 4.50312 12.6992 4.50312 12.3992V1.49922C4.50312 0.999218 4.10313 0.699219 3.70312 0.699219H1.50312C1.00312 0.699219 0.703125 1.09922 0.703125 1.49922V39.9992C0.703125 40.4992 1.10312 40.7992 1.50312 40.7992H19.4031C19.7031 40.7992 20.0031 40.5992 20.1031 40.3992L26.4031 29.4992C26.8031 28.7992 26.9031 27.9992 26.6031 27.2992L21.4031 13.3992H21.3031ZM21.9031 29.2992L17.9031 36.2992C17.7031 36.6992 17.3031 36.8992 16.8031 36.8992H5.00312C4.70312 36.8992 4.50312 36.6992 4.50312 36.3992V17.2992C4.50312 16.9992 4.70312 16.7992 5.00312 16.7992H17.5031C18.0031 16.7992 18.5031 17.0992 18.7031 17.5992L22.1031 26.7992C22.4031 27.5992 22.3031 28.5992 21.9031 29.2992Z";

/// Inline Instagram glyph. Stroke follows `currentColor`.
pub const INSTAGRAM_GLYPH: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" style="display: inline-block; vertical-align: middle;">"#,
    r#"<rect width="20" height="20" x="2" y="2" rx="5" ry="5"/>"#,
    r#"<path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/>"#,
    r#"<line x1="17.5" x2="17.51" y1="6.5" y2="6.5"/>"#,
    "</svg>"
);

/// Icon cell artwork: the brand mark scaled to 48px.
pub(crate) fn logo_svg() -> String {
    format!(
        "<svg width=\"27\" height=\"41\" viewBox=\"0 0 27 41\" fill=\"none\" xmlns=\"http://www.w3.org/2000/svg\" style=\"width: 48px; height: 48px; display: block;\">\n<path d=\"{LOGO_MARK_PATH}\" fill=\"currentColor\"/>\n</svg>"
    )
}

/// Replace the five markup-significant characters with entities.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
