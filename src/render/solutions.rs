use std::fmt::Write;

use crate::catalog::SolutionRecord;
use crate::finder::{Facet, FacetOptions, FilterState, TierFilter};
use crate::navigation::Page;
use crate::render::html::{
    attr, button_link, esc, finder_href, pill, section_header, tag_row, Variant,
};
use crate::render::PageView;
use crate::session::Session;
use crate::viewer::{current_slide, thumbnails, Carousel, Slide, EMPTY_MEDIA_MESSAGE};

pub fn page(view: &PageView) -> String {
    let filters = &view.session.filters;
    let visible = view.session.visible(view.catalog);
    let mut out = String::new();

    let _ = write!(
        out,
        r#"<div class="page-head">{}<div class="actions">{}{}{}</div></div>"#,
        section_header(
            Some("SOLUTIONS"),
            "Find the right solution in 30 seconds",
            Some("Filter by industry and situation. Click a solution to open a popup with media, steps, and pricing."),
        ),
        button_link(Variant::Secondary, &Page::Home.path(), "← Home"),
        button_link(Variant::Secondary, &Page::Industries.path(), "Industries →"),
        button_link(Variant::Primary, &view.site.calendar_link, "Book a Call")
    );

    out.push_str(r#"<div class="grid"><section class="card wide finder">"#);
    out.push_str(&search_form(filters));
    out.push_str(&facet_pills(filters));
    out.push_str("</section>");
    let _ = write!(
        out,
        r#"<section class="card"><div class="card-title">Want the fastest recommendation?</div><div class="card-body">Book a quick call. We&apos;ll match the best flow for your industry and goals.</div><div class="actions">{}{}</div></section></div>"#,
        button_link(Variant::Primary, &view.site.calendar_link, "Book a 15-min Call"),
        button_link(Variant::Secondary, &Page::Industries.path(), "See industries")
    );

    let _ = write!(
        out,
        r#"<div class="results-bar"><div class="muted">Showing <strong>{}</strong> solutions</div>{}</div>"#,
        visible.len(),
        button_link(Variant::Ghost, &Page::Solutions.path(), "Reset filters")
    );
    out.push_str(r#"<div class="grid results">"#);
    for record in &visible {
        out.push_str(&card(record, filters));
    }
    out.push_str("</div>");

    if let Some(record) = view.session.viewer.active(view.catalog) {
        out.push_str(&modal(view, record));
    }
    out
}

fn search_form(filters: &FilterState) -> String {
    let mut out = String::from(
        r#"<form class="search" method="get" action="/solutions"><label class="kicker" for="q">SEARCH</label>"#,
    );
    let _ = write!(
        out,
        r#"<input id="q" name="q" value="{}" placeholder="Try: missed calls, reminders, receptionist, WhatsApp...">"#,
        attr(&filters.query)
    );
    if !filters.tier.is_all() {
        let _ = write!(
            out,
            r#"<input type="hidden" name="tier" value="{}">"#,
            filters.tier
        );
    }
    for (name, facet) in [("industry", &filters.industry), ("need", &filters.need)] {
        if let Some(value) = facet.value() {
            let _ = write!(
                out,
                r#"<input type="hidden" name="{name}" value="{}">"#,
                attr(value)
            );
        }
    }
    out.push_str(r#"<button class="btn btn-secondary" type="submit">Search</button></form>"#);
    out
}

fn facet_pills(filters: &FilterState) -> String {
    let options = FacetOptions::standard();
    let mut out = String::from(r#"<div class="facets">"#);

    out.push_str(r#"<div class="facet"><div class="kicker">INDUSTRY</div>"#);
    for option in &options.industries {
        let state = FilterState {
            industry: Facet::from(option.clone()),
            ..filters.clone()
        };
        out.push_str(&pill(
            &finder_href(&state, None, None),
            option,
            filters.industry.is_selected(option),
        ));
    }
    out.push_str("</div>");

    out.push_str(r#"<div class="facet"><div class="kicker">NEED</div>"#);
    for option in &options.needs {
        let state = FilterState {
            need: Facet::from(option.clone()),
            ..filters.clone()
        };
        out.push_str(&pill(
            &finder_href(&state, None, None),
            option,
            filters.need.is_selected(option),
        ));
    }
    out.push_str("</div>");

    out.push_str(r#"<div class="facet"><div class="kicker">OFFER TYPE</div>"#);
    for tier in TierFilter::OPTIONS {
        let state = FilterState {
            tier,
            ..filters.clone()
        };
        out.push_str(&pill(
            &finder_href(&state, None, None),
            &tier.to_string(),
            filters.tier == tier,
        ));
    }
    out.push_str("</div></div>");
    out
}

fn card(record: &SolutionRecord, filters: &FilterState) -> String {
    format!(
        r#"<a class="card solution-card" href="{}"><div class="card-top"><div><div class="kicker">{}</div><div class="card-title">{}</div></div><div class="muted">{}</div></div><div class="card-body">{}</div>{}<div class="muted">Click to open popup &rarr;</div></a>"#,
        attr(&finder_href(filters, Some(&record.id), None)),
        record.tier.banner(),
        esc(&record.title),
        esc(&record.channels.join(" • ")),
        esc(&record.outcome),
        tag_row(&record.tags)
    )
}

fn modal(view: &PageView, record: &SolutionRecord) -> String {
    let filters = &view.session.filters;
    let close_href = finder_href(filters, None, None);
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<div class="modal" role="dialog"><a class="modal-backdrop" href="{close}" aria-label="Close"></a><div class="modal-card"><div class="modal-head"><div class="card-title">{}</div>{}</div><div class="modal-body">"#,
        esc(&record.title),
        button_link(Variant::Ghost, &close_href, "Close"),
        close = attr(&close_href)
    );
    out.push_str(&media_viewer(record, view.session.viewer.carousel(), filters));
    out.push_str(&details(record, view, &close_href));
    out.push_str("</div></div></div>");
    out
}

fn media_viewer(record: &SolutionRecord, carousel: &Carousel, filters: &FilterState) -> String {
    let href = |position: Option<usize>| finder_href(filters, Some(&record.id), position);
    let mut out = String::from(r#"<div class="media-viewer"><div class="media-frame">"#);
    match current_slide(record, carousel) {
        Slide::Empty => {
            let _ = write!(
                out,
                r#"<div class="media-empty">{}</div>"#,
                EMPTY_MEDIA_MESSAGE
            );
        }
        Slide::Video { src } => {
            let _ = write!(out, r#"<video controls src="{}"></video>"#, attr(src));
        }
        Slide::Image { src, alt } => {
            let _ = write!(out, r#"<img src="{}" alt="{}">"#, attr(src), attr(alt));
        }
        Slide::Placeholder { title, note } => {
            let _ = write!(
                out,
                r#"<div class="media-placeholder"><div class="card-title">{}</div><div class="muted">{}</div><div class="muted">(Replace with real media later)</div></div>"#,
                esc(title),
                esc(note)
            );
        }
    }

    let mut prev = *carousel;
    prev.prev();
    let mut next = *carousel;
    next.next();
    let _ = write!(
        out,
        r#"<div class="media-controls"><div class="counter">{}</div><div class="actions">{}{}</div></div></div>"#,
        carousel.counter_label(),
        button_link(Variant::Secondary, &href(prev.index()), "◀"),
        button_link(Variant::Secondary, &href(next.index()), "▶")
    );

    let thumbs = thumbnails(record, carousel);
    if !thumbs.is_empty() {
        out.push_str(r#"<div class="thumbnails">"#);
        for thumb in thumbs {
            let class = if thumb.active { "thumb thumb-active" } else { "thumb" };
            let _ = write!(
                out,
                r#"<a class="{class}" href="{}"><div class="thumb-title">{}</div><div class="thumb-note">{}</div></a>"#,
                attr(&href(Some(thumb.position))),
                esc(&thumb.label),
                esc(thumb.note)
            );
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");
    out
}

fn details(record: &SolutionRecord, view: &PageView, close_href: &str) -> String {
    let mut out = String::from(r#"<div class="details">"#);
    let _ = write!(
        out,
        r#"<div class="kicker">{} SOLUTION</div><div class="card-body">{}</div>"#,
        record.tier.banner(),
        esc(&record.outcome)
    );

    out.push_str(r#"<div class="kicker">HOW IT WORKS</div><ol>"#);
    for step in &record.how_it_works {
        let _ = write!(out, "<li>{}</li>", esc(step));
    }
    out.push_str(r#"</ol><div class="kicker">WHAT YOU GET</div><ul>"#);
    for item in &record.includes {
        let _ = write!(out, "<li>{}</li>", esc(item));
    }
    out.push_str("</ul>");

    let _ = write!(
        out,
        r#"<div class="pricing"><div class="kicker">PRICING</div><div class="price">{}</div><div class="card-body">{}</div><div class="actions">{}{}</div></div>"#,
        esc(&record.price_label),
        esc(&record.price_note),
        button_link(Variant::Primary, &view.site.calendar_link, "Get this solution"),
        button_link(Variant::Secondary, close_href, "Back")
    );

    out.push_str(r#"<div class="values">"#);
    for (title, text) in record.emotional.blocks() {
        let _ = write!(
            out,
            r#"<div class="value-block"><div class="kicker">{}</div><div class="card-body">{}</div></div>"#,
            title.to_uppercase(),
            esc(text)
        );
    }
    out.push_str("</div>");
    out.push_str(&tag_row(&record.tags));
    out.push_str("</div>");
    out
}

/// Keyboard hook emitted only while the viewer holds its escape listener.
/// Pressing Escape follows the close link.
pub fn escape_script(session: &Session) -> Option<String> {
    session.viewer.escape_listener()?;
    let close_href = finder_href(&session.filters, None, None);
    let target = serde_json::to_string(&close_href).ok()?;
    Some(format!(
        r#"(function(){{function onKey(e){{if(e&&e.key==="Escape"){{document.removeEventListener("keydown",onKey);window.location.href={target};}}}}document.addEventListener("keydown",onKey);}})();"#
    ))
}
