//! Field record → HTML email-signature fragment.
//!
//! Email clients strip `<style>` blocks and classes, so every rule is inlined.
//! Colors are always `currentColor`: the fragment inherits the text color of
//! whatever client it is pasted into, light or dark.

use std::borrow::Cow;

use super::markup::{escape_html, logo_svg, INSTAGRAM_GLYPH};
use super::{has_content, Field, SignatureFields};

const FONT: &str = "font-family: 'Courier New', monospace;";

/// How field values are written into the markup.
///
/// `render` always uses `Raw` so the exported snippet carries exactly what was
/// typed. `Escaped` is for callers that embed untrusted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Values are written verbatim. A `<` or `&` in a value ends up as markup.
    #[default]
    Raw,
    /// Values are entity-escaped before they are written.
    Escaped,
}

impl Interpolation {
    fn apply<'a>(self, value: &'a str) -> Cow<'a, str> {
        match self {
            Interpolation::Raw => Cow::Borrowed(value),
            Interpolation::Escaped => Cow::Owned(escape_html(value)),
        }
    }
}

/// One conditional row of the content table.
pub struct RowRule {
    pub field: Field,
    /// Decides from the raw value whether the row exists at all.
    pub present: fn(&str) -> bool,
    /// Builds the `<tr>` from the (already interpolated) value.
    pub format: fn(&str) -> String,
}

/// Evaluated top to bottom; the order here is the row order of the output.
#[rustfmt::skip]
pub static ROW_RULES: [RowRule; 7] = [
    RowRule { field: Field::FullName,  present: has_content, format: name_row },
    RowRule { field: Field::Title,     present: has_content, format: title_row },
    RowRule { field: Field::Phone,     present: has_content, format: phone_row },
    RowRule { field: Field::Email,     present: has_content, format: email_row },
    RowRule { field: Field::Website,   present: has_content, format: website_row },
    RowRule { field: Field::Instagram, present: has_content, format: instagram_row },
    RowRule { field: Field::Tagline,   present: has_content, format: tagline_row },
];

/// Render with verbatim values.
pub fn render(fields: &SignatureFields) -> String {
    render_with(fields, Interpolation::Raw)
}

pub fn render_with(fields: &SignatureFields, interpolation: Interpolation) -> String {
    let rows: Vec<String> = ROW_RULES
        .iter()
        .filter_map(|rule| {
            let value = fields.get(rule.field);
            (rule.present)(value).then(|| (rule.format)(&*interpolation.apply(value)))
        })
        .collect();

    let mut html = String::with_capacity(2048);
    html.push_str(&format!(
        "<table cellpadding=\"0\" cellspacing=\"0\" border=\"0\" style=\"{FONT} font-size: 14px; line-height: 1.4; color: currentColor; border-collapse: collapse;\">\n"
    ));
    html.push_str("<tr>\n");
    html.push_str("<td style=\"vertical-align: top; padding-right: 0px;\">\n");
    html.push_str(&logo_svg());
    html.push_str("\n</td>\n");
    html.push_str("<td style=\"vertical-align: top; padding-top: 20px; padding-left: 20px;\">\n");
    html.push_str(
        "<table cellpadding=\"0\" cellspacing=\"0\" border=\"0\" style=\"border-collapse: collapse;\">\n",
    );
    for row in rows {
        html.push_str(&row);
        html.push('\n');
    }
    html.push_str("</table>\n</td>\n</tr>\n</table>");
    html
}

fn row(style: &str, body: &str) -> String {
    format!("<tr><td style=\"{style}\">{body}</td></tr>")
}

fn name_row(value: &str) -> String {
    row(
        &format!("font-weight: bold; margin: 0; padding: 0 0 1px 0; color: currentColor; font-size: 16px; {FONT}"),
        value,
    )
}

fn title_row(value: &str) -> String {
    row(
        &format!("color: currentColor; opacity: 0.6; margin: 0; padding: 0 0 1px 0; font-size: 14px; font-weight: bold; {FONT}"),
        value,
    )
}

fn phone_row(value: &str) -> String {
    row(
        &format!("margin: 0; padding: 0 0 1px 0; color: currentColor; opacity: 0.6; font-size: 14px; font-weight: bold; {FONT}"),
        &format!("tel.: {value}"),
    )
}

fn email_row(value: &str) -> String {
    row(
        &format!("margin: 0; padding: 0 0 18px 0; color: currentColor; opacity: 0.6; font-size: 14px; font-weight: bold; {FONT}"),
        &format!(
            "mail: <a href=\"mailto:{value}\" style=\"color: currentColor; opacity: 0.6; text-decoration: none; font-weight: bold;\">{value}</a>"
        ),
    )
}

fn website_row(value: &str) -> String {
    row(
        &format!("margin: 0; padding: 0 0 6px 0; font-size: 15px; font-weight: bold; {FONT}"),
        &format!(
            "<a href=\"https://{value}\" style=\"color: currentColor; text-decoration: none; font-weight: bold;\">{value}</a>"
        ),
    )
}

fn instagram_row(value: &str) -> String {
    row(
        &format!("margin: 0; padding: 0 0 40px 0; font-size: 15px; {FONT} font-weight: bold;"),
        &format!(
            "<a href=\"https://instagram.com/{value}\" style=\"color: currentColor; text-decoration: none; font-weight: bold;\">{INSTAGRAM_GLYPH}</a>"
        ),
    )
}

fn tagline_row(value: &str) -> String {
    row(
        &format!("color: currentColor; opacity: 0.6; margin: 0; padding: 16px 0 0 0; font-size: 14px; {FONT} font-weight: bold;"),
        &format!("// {value}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW_OPEN: &str = "<tr><td ";

    fn row_count(html: &str) -> usize {
        html.matches(ROW_OPEN).count()
    }

    #[test]
    fn empty_record_keeps_frame_without_rows() {
        let html = render(&SignatureFields::default());
        assert!(html.starts_with("<table "));
        assert!(html.ends_with("</table>"));
        assert!(html.contains("viewBox=\"0 0 27 41\""));
        assert_eq!(row_count(&html), 0);
    }

    #[test]
    fn rules_follow_field_order() {
        let order: Vec<Field> = ROW_RULES.iter().map(|rule| rule.field).collect();
        assert_eq!(order, Field::ALL.to_vec());
    }

    #[test]
    fn each_single_field_yields_one_row() {
        for field in Field::ALL {
            let fields = SignatureFields::new().with(field, "value");
            assert_eq!(row_count(&render(&fields)), 1, "field {field:?}");
        }
    }

    fn single_row(field: Field) -> String {
        let html = render(&SignatureFields::new().with(field, "value"));
        let rows: Vec<&str> = html.lines().filter(|line| line.starts_with(ROW_OPEN)).collect();
        assert_eq!(rows.len(), 1, "field {field:?}");
        rows[0].to_string()
    }

    #[test]
    fn name_row_is_large_and_bold() {
        let row = single_row(Field::FullName);
        assert!(row.contains("font-weight: bold;"));
        assert!(row.contains("font-size: 16px;"));
        assert!(row.contains("padding: 0 0 1px 0;"));
        assert!(!row.contains("opacity"));
    }

    #[test]
    fn title_and_phone_rows_are_muted_bold_text() {
        for field in [Field::Title, Field::Phone] {
            let row = single_row(field);
            assert!(row.contains("font-weight: bold;"), "{field:?}");
            assert!(row.contains("font-size: 14px;"), "{field:?}");
            assert!(row.contains("opacity: 0.6;"), "{field:?}");
            assert!(row.contains("padding: 0 0 1px 0;"), "{field:?}");
        }
        assert!(single_row(Field::Phone).contains(">tel.: value</td>"));
    }

    #[test]
    fn email_row_closes_the_contact_block() {
        let row = single_row(Field::Email);
        assert!(row.contains("padding: 0 0 18px 0;"));
        assert!(row.contains("href=\"mailto:value\""));
    }

    #[test]
    fn website_row_gets_extra_spacing() {
        let row = single_row(Field::Website);
        assert!(row.contains("font-size: 15px;"));
        assert!(row.contains("padding: 0 0 6px 0;"));
        assert!(!row.contains("padding: 0 0 1px 0;"));
        assert!(row.contains("href=\"https://value\""));
    }

    #[test]
    fn instagram_row_links_the_glyph() {
        let row = single_row(Field::Instagram);
        assert!(row.contains("padding: 0 0 40px 0;"));
        assert!(row.contains("href=\"https://instagram.com/value\""));
        assert!(row.contains(INSTAGRAM_GLYPH));
        assert!(!row.contains(">value<"));
    }

    #[test]
    fn tagline_row_sits_below_with_top_padding() {
        let row = single_row(Field::Tagline);
        assert!(row.contains("padding: 16px 0 0 0;"));
        assert!(row.contains("opacity: 0.6;"));
        assert!(row.contains(">// value</td>"));
    }

    #[test]
    fn presence_matches_filled() {
        for value in ["", "  ", "\t\n", "x", " x "] {
            for field in Field::ALL {
                let fields = SignatureFields::new().with(field, value);
                let expected = usize::from(fields.filled(field).is_some());
                assert_eq!(row_count(&render(&fields)), expected, "{field:?} {value:?}");
            }
        }
    }

    #[test]
    fn phone_and_tagline_prefixes() {
        let fields = SignatureFields::new()
            .with(Field::Phone, "+1 555 0100")
            .with(Field::Tagline, "build slowly");
        let html = render(&fields);
        assert!(html.contains(">tel.: +1 555 0100</td>"));
        assert!(html.contains(">// build slowly</td>"));
    }

    #[test]
    fn whitespace_only_values_are_skipped() {
        let fields = SignatureFields::new()
            .with(Field::FullName, " \t ")
            .with(Field::Title, "\n");
        assert_eq!(row_count(&render(&fields)), 0);
    }

    #[test]
    fn no_hex_colors_are_emitted() {
        let mut fields = SignatureFields::new();
        for field in Field::ALL {
            fields.set(field, "x");
        }
        let html = render(&fields);
        assert!(!html.contains('#'));
        assert!(html.contains("color: currentColor"));
    }

    #[test]
    fn raw_interpolation_is_verbatim() {
        let fields = SignatureFields::new().with(Field::FullName, "A & <B>");
        let html = render(&fields);
        assert!(html.contains(">A & <B></td>"));
    }

    #[test]
    fn escaped_interpolation_encodes_values() {
        let fields = SignatureFields::new()
            .with(Field::FullName, "A & <B>")
            .with(Field::Website, "x.com/?a=1&b=2");
        let html = render_with(&fields, Interpolation::Escaped);
        assert!(html.contains(">A &amp; &lt;B&gt;</td>"));
        assert!(html.contains("href=\"https://x.com/?a=1&amp;b=2\""));
    }
}
