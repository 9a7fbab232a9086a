//! Server-side HTML for every page. Renderers are pure functions from
//! session + config to a `String`; all user actions are plain links and forms
//! that the server turns back into session transitions.

pub mod html;
pub mod pages;
pub mod solutions;

use std::fmt::Write;

use chrono::{Datelike, Local};

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::contact::SubmissionOutcome;
use crate::navigation::Page;
use crate::session::Session;

use html::{attr, button_link, esc, Variant};

pub struct PageView<'a> {
    pub site: &'a SiteConfig,
    pub catalog: &'a Catalog,
    pub session: &'a Session,
}

/// Full document for the session's current page.
pub fn render_page(view: &PageView) -> String {
    let page = view.session.page();
    let mut script = None;
    let body = match page {
        Page::Home => pages::home(view.site, view.catalog),
        Page::Solutions => {
            script = solutions::escape_script(view.session);
            solutions::page(view)
        }
        Page::Industries => pages::industries(view.site),
        Page::About => pages::about(view.site),
        Page::Contact => pages::contact(view.site),
        Page::Privacy | Page::Terms => pages::legal(page),
    };
    layout(view.site, Some(page), &page.to_string(), &body, script.as_deref())
}

pub fn render_not_found(site: &SiteConfig, path: &str) -> String {
    let body = pages::not_found(path);
    layout(site, None, "Not found", &body, None)
}

pub fn render_contact_result(site: &SiteConfig, outcome: &SubmissionOutcome) -> String {
    let body = pages::contact_result(site, outcome);
    layout(site, Some(Page::Contact), "Contact", &body, None)
}

fn layout(
    site: &SiteConfig,
    current: Option<Page>,
    title: &str,
    body: &str,
    script: Option<&str>,
) -> String {
    let mut out = String::with_capacity(body.len() + 4096);
    let _ = write!(
        out,
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{} · {}</title></head><body>"#,
        esc(title),
        esc(&site.brand_name)
    );
    out.push_str(&header(site, current));
    let _ = write!(out, r#"<main class="page">{body}</main>"#);
    out.push_str(&footer(site, Local::now().year()));
    if let Some(script) = script {
        let _ = write!(out, "<script>{script}</script>");
    }
    out.push_str("</body></html>");
    out
}

fn logo(brand_name: &str) -> String {
    format!(
        r#"<a class="logo" href="/"><span class="logo-mark">A</span><span class="logo-text">{}</span></a>"#,
        esc(brand_name)
    )
}

fn header(site: &SiteConfig, current: Option<Page>) -> String {
    let mut out = String::from(r#"<header class="top-nav">"#);
    out.push_str(&logo(&site.brand_name));
    out.push_str("<nav>");
    for page in Page::PRIMARY {
        let class = if current == Some(page) {
            "nav-link nav-link-active"
        } else {
            "nav-link"
        };
        let _ = write!(
            out,
            r#"<a class="{class}" href="{}">{}</a>"#,
            attr(&page.path()),
            esc(&page.to_string())
        );
    }
    out.push_str("</nav><div class=\"nav-actions\">");
    out.push_str(&button_link(Variant::Secondary, &site.calendar_link, "Book a Call"));
    out.push_str(&button_link(
        Variant::Primary,
        &Page::Solutions.path(),
        "Find My Solution",
    ));
    out.push_str("</div></header>");
    out
}

fn footer(site: &SiteConfig, year: i32) -> String {
    let mut out = String::from(r#"<footer class="site-footer"><div class="footer-grid">"#);
    let _ = write!(
        out,
        r#"<div>{}<p class="footer-tagline">{}</p></div>"#,
        logo(&site.brand_name),
        esc(&site.footer_tagline)
    );
    out.push_str(r#"<div><div class="footer-title">Pages</div>"#);
    for page in Page::PRIMARY {
        let _ = write!(
            out,
            r#"<a class="footer-link" href="{}">{}</a>"#,
            attr(&page.path()),
            esc(&page.to_string())
        );
    }
    out.push_str("</div>");
    let _ = write!(
        out,
        r#"<div><div class="footer-title">Legal</div><a class="footer-link" href="{}">Privacy Policy</a><a class="footer-link" href="{}">Terms</a></div>"#,
        Page::Privacy.path(),
        Page::Terms.path()
    );
    let _ = write!(
        out,
        r#"<div><div class="footer-title">Contact</div><div>{}</div><div>{}</div><div class="muted">(Location placeholder)</div></div>"#,
        esc(&site.contact_email),
        esc(&site.contact_phone)
    );
    let _ = write!(
        out,
        r#"</div><div class="footer-bottom"><div>&copy; {year} {}. All rights reserved.</div><div><a href="{}">Privacy</a> <a href="{}">Terms</a> <a href="{}">Contact</a></div></div></footer>"#,
        esc(&site.brand_name),
        Page::Privacy.path(),
        Page::Terms.path(),
        Page::Contact.path()
    );
    out
}
