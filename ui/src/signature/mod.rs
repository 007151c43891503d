//! Signature field record and the HTML fragment built from it.
//!
//! The record is the single piece of state behind both the live preview and
//! the exported markup. It is owned by the generator view and only changes
//! through [`SignatureFields::set`] and [`SignatureFields::clear`].

mod markup;
mod render;

pub use markup::{escape_html, INSTAGRAM_GLYPH, LOGO_MARK_PATH};
pub use render::{render, render_with, Interpolation, RowRule, ROW_RULES};

/// One input slot of the signature, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Title,
    Phone,
    Email,
    Website,
    Instagram,
    Tagline,
}

impl Field {
    /// Fixed row order shared by the form, the preview and the export.
    pub const ALL: [Field; 7] = [
        Field::FullName,
        Field::Title,
        Field::Phone,
        Field::Email,
        Field::Website,
        Field::Instagram,
        Field::Tagline,
    ];

    /// Stable identifier used for input ids and CSS hooks.
    pub fn id(self) -> &'static str {
        match self {
            Field::FullName => "full-name",
            Field::Title => "title",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Website => "website",
            Field::Instagram => "instagram",
            Field::Tagline => "tagline",
        }
    }
}

/// Seven free-text values. Every field is optional; empty means "no row".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureFields {
    full_name: String,
    title: String,
    phone: String,
    email: String,
    website: String,
    instagram: String,
    tagline: String,
}

impl SignatureFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value exactly as typed.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Title => &self.title,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Website => &self.website,
            Field::Instagram => &self.instagram,
            Field::Tagline => &self.tagline,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Builder-style setter, handy for tests and fixtures.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// The raw value when it carries any non-whitespace text.
    ///
    /// This is the one predicate deciding whether a row exists, both in the
    /// exported fragment and in the live preview.
    pub fn filled(&self, field: Field) -> Option<&str> {
        let value = self.get(field);
        has_content(value).then_some(value)
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.filled(*field).is_none())
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FullName => &mut self.full_name,
            Field::Title => &mut self.title,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Website => &mut self.website,
            Field::Instagram => &mut self.instagram,
            Field::Tagline => &mut self.tagline,
        }
    }
}

/// A value counts as filled when it has anything besides whitespace. Export
/// rows and preview slots both go through this check.
pub fn has_content(value: &str) -> bool {
    !value.trim().is_empty()
}
