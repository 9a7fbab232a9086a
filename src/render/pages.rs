use std::fmt::Write;

use crate::catalog::content::{
    TextBlock, FAQS, FOCUS_BLOCKS, HERO_POINTS, INDUSTRIES, LEGAL_SECTIONS, NEED_TILES,
    PRINCIPLES, PROFESSIONALS, PROOF_STATS, STEPS, TEASER_PROFESSIONALS, TESTIMONIALS,
    TYPICAL_STACK, WORKFLOW_PREVIEW,
};
use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::contact::SubmissionOutcome;
use crate::finder::{Facet, FilterState};
use crate::navigation::Page;
use crate::render::html::{
    attr, button_link, esc, finder_href, section_header, tag_row, Variant,
};

fn page_head(kicker: &str, title: &str, subtitle: &str, actions: &[String]) -> String {
    format!(
        r#"<div class="page-head">{}<div class="actions">{}</div></div>"#,
        section_header(Some(kicker), title, Some(subtitle)),
        actions.concat()
    )
}

fn home_button() -> String {
    button_link(Variant::Secondary, &Page::Home.path(), "← Home")
}

fn book_call(site: &SiteConfig) -> String {
    button_link(Variant::Primary, &site.calendar_link, "Book a Call")
}

fn cards(blocks: &[TextBlock], class: &str) -> String {
    let mut out = String::new();
    for block in blocks {
        let _ = write!(
            out,
            r#"<div class="{class}"><div class="card-title">{}</div><div class="card-body">{}</div></div>"#,
            esc(block.title),
            esc(block.body)
        );
    }
    out
}

fn photo_cards(labels: &[&str]) -> String {
    let mut out = String::from(r#"<div class="photo-grid">"#);
    for label in labels {
        let _ = write!(out, r#"<div class="photo-card">{}</div>"#, esc(label));
    }
    out.push_str("</div>");
    out
}

/// Link that enters the finder with `need` carried over.
pub fn need_href(need: &str) -> String {
    let state = FilterState {
        need: Facet::only(need),
        ..FilterState::default()
    };
    finder_href(&state, None, None)
}

pub fn open_href(id: &str) -> String {
    finder_href(&FilterState::default(), Some(id), None)
}

pub fn home(site: &SiteConfig, catalog: &Catalog) -> String {
    let solutions = Page::Solutions.path();
    let industries_path = Page::Industries.path();
    let mut out = String::new();

    out.push_str(r#"<section class="hero"><div>"#);
    out.push_str(r#"<div class="badge">Growth &bull; Peace of mind &bull; Better service</div>"#);
    let _ = write!(
        out,
        "<h1>{}</h1><p class=\"lead\">{}</p><ul class=\"hero-points\">",
        esc(&site.hero_title),
        esc(&site.hero_subtitle)
    );
    for point in HERO_POINTS {
        let _ = write!(out, "<li>{}</li>", esc(point));
    }
    out.push_str("</ul><div class=\"actions\">");
    out.push_str(&button_link(Variant::Primary, &solutions, "Find My Solution"));
    out.push_str(&button_link(Variant::Secondary, &industries_path, "See Industries"));
    out.push_str(&button_link(Variant::Secondary, &site.calendar_link, "Book a Call"));
    out.push_str("</div>");
    out.push_str(&tag_row(&["Built fast", "Works with your stack", "Trackable results"]));
    out.push_str(r#"</div><div class="card workflow"><div class="card-title">Workflow preview</div><div class="muted">Missed-call recovery</div>"#);
    for (step, title, detail) in WORKFLOW_PREVIEW {
        let _ = write!(
            out,
            r#"<div class="workflow-step"><div class="kicker">{}</div><div class="card-title">{}</div><div class="card-body">{}</div></div>"#,
            esc(step),
            esc(title),
            esc(detail)
        );
    }
    out.push_str(r#"<div class="muted">(Replace placeholders with real screenshots later.)</div></div></section>"#);

    out.push_str(r#"<section id="needs">"#);
    out.push_str(&page_head(
        "START HERE",
        "What are you trying to fix right now?",
        "Click a tile to jump into the Solutions Finder with the right filter.",
        &[button_link(Variant::Secondary, &solutions, "Open solutions →")],
    ));
    out.push_str(r#"<div class="grid">"#);
    for tile in NEED_TILES {
        let _ = write!(
            out,
            r#"<a class="card need-tile" href="{}"><div class="card-title">{}</div><div class="card-body">{}</div></a>"#,
            attr(&need_href(tile.need)),
            esc(tile.title),
            esc(tile.desc)
        );
    }
    out.push_str("</div></section>");

    out.push_str("<section>");
    out.push_str(&section_header(
        Some("HOW IT WORKS"),
        "A simple path from chaos to clarity",
        Some("Systems create leverage: more money, more control, more peace of mind."),
    ));
    out.push_str(r#"<div class="grid">"#);
    for (n, step) in STEPS.iter().enumerate() {
        let _ = write!(
            out,
            r#"<div class="card step"><div class="kicker">STEP {}</div><div class="card-title">{}</div><div class="card-body">{}</div></div>"#,
            n + 1,
            esc(step.title),
            esc(step.body)
        );
    }
    out.push_str("</div></section>");

    out.push_str("<section>");
    out.push_str(&section_header(
        Some("PROOF"),
        "What clients usually get in the first 30 days",
        Some("Swap placeholders with real metrics as you collect results."),
    ));
    out.push_str(r#"<div class="grid">"#);
    for stat in PROOF_STATS {
        let _ = write!(
            out,
            r#"<div class="card stat"><div class="kicker">{}</div><div class="stat-value">{}</div><div class="card-body">{}</div></div>"#,
            esc(stat.label),
            esc(stat.value),
            esc(stat.note)
        );
    }
    out.push_str("</div></section>");

    out.push_str("<section>");
    out.push_str(&page_head(
        "FEATURED",
        "Popular solutions",
        "Need-driven offers that solve real problems — not just “tools.”",
        &[button_link(Variant::Secondary, &solutions, "Browse all →")],
    ));
    out.push_str(r#"<div class="grid">"#);
    for record in catalog.featured() {
        let tags: Vec<&str> = record.tags.iter().take(3).map(String::as_str).collect();
        let _ = write!(
            out,
            r#"<div class="card"><div class="kicker">{}</div><div class="card-title">{}</div><div class="card-body">{}</div>{}<div class="actions">{}{}</div></div>"#,
            record.tier.banner(),
            esc(&record.title),
            esc(&record.outcome),
            tag_row(&tags),
            button_link(Variant::Primary, &open_href(&record.id), "View details"),
            button_link(Variant::Secondary, &solutions, "Compare")
        );
    }
    out.push_str("</div></section>");

    out.push_str(r#"<section class="card teaser"><div>"#);
    out.push_str(&section_header(
        Some("INDUSTRIES"),
        "Built for the people who run the real world",
        Some("Clinics, dentists, beauty, and field teams — systems that help you respond faster and follow up consistently."),
    ));
    let labels: Vec<&str> = INDUSTRIES.iter().map(|i| i.label).collect();
    out.push_str(&tag_row(&labels));
    out.push_str(&button_link(Variant::Primary, &industries_path, "Explore industries →"));
    out.push_str("</div><div>");
    out.push_str(&photo_cards(&TEASER_PROFESSIONALS));
    out.push_str(r#"<div class="muted">(Replace placeholders with real photos of professionals smiling and proud.)</div></div></section>"#);

    out.push_str("<section>");
    out.push_str(&section_header(
        Some("STORIES"),
        "The outcome clients actually want",
        Some("More money, more control, and peace of mind — because the system keeps working even when you're busy."),
    ));
    out.push_str(r#"<div class="grid">"#);
    for quote in TESTIMONIALS {
        let _ = write!(
            out,
            r#"<figure class="card quote"><blockquote>&ldquo;{}&rdquo;</blockquote><figcaption><div class="card-title">{}</div><div class="muted">{}</div></figcaption></figure>"#,
            esc(quote.quote),
            esc(quote.name),
            esc(quote.role)
        );
    }
    out.push_str("</div></section>");

    out.push_str("<section>");
    out.push_str(&section_header(
        Some("FAQ"),
        "Quick answers",
        Some("This is where you remove friction and help SEO with clear intent-based content."),
    ));
    for faq in FAQS {
        let _ = write!(
            out,
            r#"<details class="card faq"><summary>{}</summary><div class="card-body">{}</div></details>"#,
            esc(faq.title),
            esc(faq.body)
        );
    }
    out.push_str("</section>");

    out.push_str(&cta_box(
        "Ready to stop losing clients when you're busy?",
        "Pick a solution or book a quick call — we'll map the best workflow for your industry and goals.",
        &solutions,
        site,
    ));
    out
}

fn cta_box(title: &str, subtitle: &str, primary_href: &str, site: &SiteConfig) -> String {
    format!(
        r#"<section class="cta-box"><div class="card-title">{}</div><div class="card-body">{}</div><div class="actions">{}{}</div></section>"#,
        esc(title),
        esc(subtitle),
        button_link(Variant::Primary, primary_href, "Find My Solution"),
        button_link(Variant::Secondary, &site.calendar_link, "Book a Call")
    )
}

pub fn industries(site: &SiteConfig) -> String {
    let mut out = page_head(
        "INDUSTRIES",
        "Built for the people who run the real world",
        "We help service businesses respond faster, follow up consistently, and grow with systems — not stress.",
        &[
            home_button(),
            button_link(Variant::Secondary, &Page::Solutions.path(), "Solutions →"),
            book_call(site),
        ],
    );
    out.push_str(r#"<section class="card"><div class="kicker">WHO WE HELP</div><div class="grid">"#);
    for industry in INDUSTRIES {
        let _ = write!(
            out,
            r#"<div class="industry" id="{}"><div class="card-title">{}</div><div class="card-body">{}</div></div>"#,
            attr(industry.key),
            esc(industry.label),
            esc(&industry.examples.join(" • "))
        );
    }
    out.push_str("</div></section>");
    for block in FOCUS_BLOCKS {
        let _ = write!(
            out,
            r#"<section class="card focus"><div><div class="kicker">FOCUS</div><div class="card-title">{}</div><div class="card-body">{}</div><div class="muted">(Replace these placeholders with real photos of professionals smiling and proud.)</div></div>{}</section>"#,
            esc(block.title),
            esc(block.body),
            photo_cards(&PROFESSIONALS)
        );
    }
    let _ = write!(
        out,
        r#"<div class="center">{}</div>"#,
        button_link(Variant::Primary, &Page::Solutions.path(), "Explore solutions →")
    );
    out
}

pub fn about(site: &SiteConfig) -> String {
    let mut out = page_head(
        "ABOUT",
        "We build systems that keep working when you're busy",
        &format!(
            "{} is focused on need-driven automation and AI agents for service businesses.",
            site.brand_name
        ),
        &[
            home_button(),
            button_link(Variant::Secondary, &Page::Solutions.path(), "Solutions →"),
            book_call(site),
        ],
    );
    out.push_str(r#"<div class="grid"><section class="card wide"><div class="card-title">Our philosophy</div>"#);
    out.push_str(
        r#"<div class="card-body">Most businesses don&apos;t need more &ldquo;tools.&rdquo; They need outcomes: faster response, consistent follow-up, fewer no-shows, more closed deals, and better customer experience. We package proven workflows into solutions you can deploy and improve over time.</div>"#,
    );
    let _ = write!(out, r#"<div class="grid">{}</div></section>"#, cards(&PRINCIPLES, "principle"));
    out.push_str(r#"<section class="card"><div class="card-title">Typical stack</div><div class="card-body">WhatsApp/SMS/Voice + automations + databases + dashboards.</div>"#);
    out.push_str(&tag_row(&TYPICAL_STACK));
    out.push_str(&button_link(Variant::Primary, &site.calendar_link, "Talk to us"));
    out.push_str("</section></div>");
    out
}

fn field(name: &str, label: &str, placeholder: &str) -> String {
    format!(
        r#"<label class="field"><span class="kicker">{}</span><input name="{name}" placeholder="{}"></label>"#,
        esc(label),
        attr(placeholder)
    )
}

pub fn contact(site: &SiteConfig) -> String {
    let mut out = page_head(
        "CONTACT",
        "Tell us what you need",
        "Describe the situation (industry + problem). We'll recommend the best solution.",
        &[
            home_button(),
            button_link(Variant::Secondary, &Page::Solutions.path(), "Solutions →"),
            book_call(site),
        ],
    );
    out.push_str(r#"<div class="grid"><form class="card wide" method="post" action="/contact"><div class="card-title">Contact form</div><div class="grid">"#);
    out.push_str(&field("name", "Name", "Your name"));
    out.push_str(&field("email", "Email", "you@email.com"));
    out.push_str(&field("phone", "Phone / WhatsApp", "+503 ..."));
    out.push_str(&field(
        "industry",
        "Industry",
        "Dentist / Clinic / Beauty / Contractor...",
    ));
    out.push_str("</div>");
    out.push_str(r#"<label class="field"><span class="kicker">What do you need solved?</span><textarea name="problem" rows="6" placeholder="Example: I miss calls after hours and lose leads. I want WhatsApp auto-replies + lead capture + booking."></textarea></label>"#);
    let _ = write!(
        out,
        r#"<div class="actions"><button class="btn btn-primary" type="submit">Send</button>{}</div></form>"#,
        button_link(Variant::Secondary, &site.calendar_link, "Or book a call")
    );
    let _ = write!(
        out,
        r#"<section class="card"><div class="card-title">Direct contact</div><div class="card-body">Email: {}</div><div class="card-body">Phone: {}</div><div class="kicker">FASTEST PATH</div><div class="card-body">Book a quick call. We&apos;ll map a solution based on your need and industry.</div>{}</section></div>"#,
        esc(&site.contact_email),
        esc(&site.contact_phone),
        button_link(Variant::Primary, &site.calendar_link, "Book a 15-min Call")
    );
    out
}

pub fn contact_result(site: &SiteConfig, outcome: &SubmissionOutcome) -> String {
    let (title, body) = match outcome {
        SubmissionOutcome::Accepted => (
            "Thanks, we got it".to_string(),
            "We'll reply with a recommended solution shortly.".to_string(),
        ),
        SubmissionOutcome::NotConfigured => (
            "Form not connected yet".to_string(),
            format!(
                "This form is a placeholder. Email us at {} or book a call instead.",
                site.contact_email
            ),
        ),
        SubmissionOutcome::Rejected { reason } => (
            "We couldn't send your message".to_string(),
            format!("{reason}. Please email {} instead.", site.contact_email),
        ),
    };
    let mut out = page_head("CONTACT", &title, &body, &[home_button(), book_call(site)]);
    let _ = write!(
        out,
        r#"<div class="center">{}</div>"#,
        button_link(Variant::Secondary, &Page::Contact.path(), "Back to the form")
    );
    out
}

/// Placeholder legal page for `Privacy` or `Terms`.
pub fn legal(page: Page) -> String {
    let (title, subtitle) = match page {
        Page::Terms => (
            "Terms of Service",
            "Placeholder — replace with your final terms.",
        ),
        _ => (
            "Privacy Policy",
            "Placeholder — replace with your final privacy policy.",
        ),
    };
    let mut out = page_head("LEGAL", title, subtitle, &[home_button()]);
    let _ = write!(
        out,
        r#"<section class="card legal"><div class="card-body">This is a placeholder {} page. Replace the sections below with your final legal text.</div>{}</section>"#,
        esc(title),
        cards(&LEGAL_SECTIONS, "legal-section")
    );
    out
}

pub fn not_found(path: &str) -> String {
    let mut out = page_head(
        "404",
        "Page not found",
        &format!("Nothing lives at {path}."),
        &[
            home_button(),
            button_link(Variant::Primary, &Page::Solutions.path(), "Find My Solution"),
        ],
    );
    out.push_str(r#"<div class="center muted">Try the Solutions Finder instead.</div>"#);
    out
}
