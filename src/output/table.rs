use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};

use crate::catalog::{SolutionRecord, Tier};
use crate::finder::FacetOptions;
use crate::viewer::{current_slide, Carousel, Slide};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn tier_cell(tier: Tier) -> Cell {
    match tier {
        Tier::Major => Cell::new(tier.banner()).fg(Color::Cyan),
        Tier::Mini => Cell::new(tier.banner()).fg(Color::Green),
    }
}

pub fn render_solutions_table(records: &[&SolutionRecord]) -> String {
    let mut table = new_table();
    table.set_header(vec!["#", "Id", "Tier", "Title", "Channels", "Price"]);
    for (rank, record) in records.iter().enumerate() {
        table.add_row(Row::from(vec![
            Cell::new(rank + 1),
            Cell::new(&record.id),
            tier_cell(record.tier),
            Cell::new(&record.title),
            Cell::new(record.channels.join(" • ")),
            Cell::new(&record.price_label),
        ]));
    }
    table.to_string()
}

pub fn render_detail_table(record: &SolutionRecord, carousel: &Carousel) -> String {
    let mut table = new_table();
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["Id".to_string(), record.id.clone()]);
    table.add_row(Row::from(vec![
        Cell::new("Tier"),
        Cell::new(format!("{} SOLUTION", record.tier.banner())),
    ]));
    table.add_row(vec!["Title".to_string(), record.title.clone()]);
    table.add_row(vec!["Outcome".to_string(), record.outcome.clone()]);
    table.add_row(vec!["Industries".to_string(), record.industries.join(", ")]);
    table.add_row(vec!["Needs".to_string(), record.needs.join(", ")]);
    table.add_row(vec!["Channels".to_string(), record.channels.join(" • ")]);
    let steps = record
        .how_it_works
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {step}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");
    table.add_row(vec!["How it works".to_string(), steps]);
    table.add_row(vec!["What you get".to_string(), record.includes.join("\n")]);
    table.add_row(vec![
        "Pricing".to_string(),
        format!("{}\n{}", record.price_label, record.price_note),
    ]);
    for (title, text) in record.emotional.blocks() {
        table.add_row(vec![title.to_string(), text.to_string()]);
    }
    table.add_row(vec!["Tags".to_string(), record.tags.join(", ")]);
    table.add_row(vec![
        format!("Media {}", carousel.counter_label()),
        describe_slide(&current_slide(record, carousel)),
    ]);
    table.to_string()
}

fn describe_slide(slide: &Slide) -> String {
    match slide {
        Slide::Empty => crate::viewer::EMPTY_MEDIA_MESSAGE.to_string(),
        Slide::Video { src } => format!("▶ {src}"),
        Slide::Image { src, alt } => format!("▢ {alt} ({src})"),
        Slide::Placeholder { title, note } => format!("{title} ({note})"),
    }
}

pub fn render_options_table(options: &FacetOptions) -> String {
    let mut table = new_table();
    table.set_header(vec!["Facet", "Options"]);
    table.add_row(vec!["Offer type".to_string(), options.tiers.join(", ")]);
    table.add_row(vec!["Industry".to_string(), options.industries.join(", ")]);
    table.add_row(vec!["Need".to_string(), options.needs.join(", ")]);
    table.to_string()
}
