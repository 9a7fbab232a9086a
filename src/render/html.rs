use std::fmt::Write;

use crate::finder::{FilterState, TierFilter};

pub fn esc(text: &str) -> String {
    html_escape::encode_text(text).to_string()
}

pub fn attr(text: &str) -> String {
    html_escape::encode_double_quoted_attribute(text).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Primary,
    Secondary,
    Ghost,
}

impl Variant {
    fn class(&self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Secondary => "btn btn-secondary",
            Self::Ghost => "btn btn-ghost",
        }
    }
}

pub fn button_link(variant: Variant, href: &str, label: &str) -> String {
    format!(
        r#"<a class="{}" href="{}">{}</a>"#,
        variant.class(),
        attr(href),
        esc(label)
    )
}

pub fn section_header(kicker: Option<&str>, title: &str, subtitle: Option<&str>) -> String {
    let mut out = String::from(r#"<div class="section-header">"#);
    if let Some(kicker) = kicker {
        let _ = write!(out, r#"<div class="kicker">{}</div>"#, esc(kicker));
    }
    let _ = write!(out, r#"<h2 class="title">{}</h2>"#, esc(title));
    if let Some(subtitle) = subtitle {
        let _ = write!(out, r#"<p class="subtitle">{}</p>"#, esc(subtitle));
    }
    out.push_str("</div>");
    out
}

pub fn tag_row<S: AsRef<str>>(tags: &[S]) -> String {
    let mut out = String::from(r#"<div class="tag-row">"#);
    for tag in tags {
        let _ = write!(out, r#"<span class="tag">{}</span>"#, esc(tag.as_ref()));
    }
    out.push_str("</div>");
    out
}

pub fn pill(href: &str, label: &str, active: bool) -> String {
    let class = if active { "pill pill-active" } else { "pill" };
    format!(
        r#"<a class="{class}" href="{}">{}</a>"#,
        attr(href),
        esc(label)
    )
}

/// Query string for the finder: filter fields that differ from the defaults,
/// then the open record and carousel position.
pub fn finder_href(state: &FilterState, open: Option<&str>, media: Option<usize>) -> String {
    let mut params: Vec<(&str, String)> = Vec::new();
    let query = state.query.trim();
    if !query.is_empty() {
        params.push(("q", query.to_string()));
    }
    if state.tier != TierFilter::All {
        params.push(("tier", state.tier.to_string()));
    }
    if let Some(industry) = state.industry.value() {
        params.push(("industry", industry.to_string()));
    }
    if let Some(need) = state.need.value() {
        params.push(("need", need.to_string()));
    }
    if let Some(id) = open {
        params.push(("open", id.to_string()));
        if let Some(position) = media.filter(|p| *p > 0) {
            params.push(("media", position.to_string()));
        }
    }
    if params.is_empty() {
        return "/solutions".to_string();
    }
    let encoded = params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("/solutions?{encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finder::Facet;

    #[test]
    fn escapes_markup() {
        assert_eq!(esc("<b>&"), "&lt;b&gt;&amp;");
        assert_eq!(attr(r#"a"b"#), "a&quot;b");
    }

    #[test]
    fn default_finder_href_has_no_query() {
        assert_eq!(finder_href(&FilterState::default(), None, None), "/solutions");
    }

    #[test]
    fn finder_href_encodes_values() {
        let state = FilterState {
            query: " after hours ".to_string(),
            tier: TierFilter::Mini,
            industry: Facet::only("Beauty Salons"),
            need: Facet::only("After-hours"),
        };
        assert_eq!(
            finder_href(&state, Some("whatsapp-busy-pack"), Some(1)),
            "/solutions?q=after%20hours&tier=Mini&industry=Beauty%20Salons&need=After-hours&open=whatsapp-busy-pack&media=1"
        );
    }

    #[test]
    fn media_zero_is_omitted() {
        let href = finder_href(&FilterState::default(), Some("ai-receptionist"), Some(0));
        assert_eq!(href, "/solutions?open=ai-receptionist");
    }
}
