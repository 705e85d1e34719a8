//! CSS output: a fixed-size element whose background is the scaled sheet.

use std::fmt::Write;

use super::traits::IconSurface;
use crate::systems::placement::Placement;

/// Renders placements as background-image styling.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssSurface;

/// Inline style plus accessibility attributes for one icon element.
#[derive(Debug, Clone, PartialEq)]
pub struct IconStyle {
    /// `(property, value)` pairs in emission order.
    pub declarations: Vec<(&'static str, String)>,
    pub role: String,
    pub label: String,
}

impl IconSurface for CssSurface {
    type Output = IconStyle;

    fn compose(&self, source: &str, placement: &Placement) -> IconStyle {
        let size = px(placement.size);
        let mut declarations = vec![
            ("width", size.clone()),
            ("height", size),
            ("background-image", format!("url(\"{}\")", escape_css_url(source))),
            ("background-repeat", "no-repeat".to_string()),
            (
                "background-size",
                format!("{} {}", px(placement.sheet_size.x), px(placement.sheet_size.y)),
            ),
            (
                "background-position",
                format!("{} {}", px(placement.offset.x), px(placement.offset.y)),
            ),
        ];

        if let Some(frame) = &placement.frame {
            declarations.push((
                "border",
                format!("{} solid {}", px(frame.border_width), frame.color),
            ));
            declarations.push((
                "box-shadow",
                format!("0 0 {} {}", px(frame.glow_radius), frame.color),
            ));
        }

        IconStyle {
            declarations,
            role: placement.role.clone(),
            label: placement.label.clone(),
        }
    }
}

impl IconStyle {
    /// Value for a `style="..."` attribute.
    pub fn inline(&self) -> String {
        let mut out = String::new();
        for (i, (property, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{property}: {value};");
        }
        out
    }

    /// Look up a declaration value by property name.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    /// A standalone `<div>` element with escaped attributes.
    pub fn to_html(&self) -> String {
        format!(
            r#"<div role="{}" aria-label="{}" style="{}"></div>"#,
            escape_attr(&self.role),
            escape_attr(&self.label),
            escape_attr(&self.inline()),
        )
    }
}

/// Format a pixel length the way a browser would print it: no trailing
/// `.0`, and no negative zero.
fn px(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}px")
    }
}

/// Escape for a double-quoted CSS string. Line breaks become hex escapes,
/// with a trailing space to end the escape.
fn escape_css_url(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for c in url.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\A "),
            '\r' => out.push_str("\\D "),
            '\u{c}' => out.push_str("\\C "),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
