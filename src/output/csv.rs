use anyhow::Result;

use crate::catalog::SolutionRecord;
use crate::finder::FacetOptions;

pub fn solutions_to_csv(records: &[&SolutionRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record([
        "id",
        "tier",
        "title",
        "industries",
        "needs",
        "channels",
        "price_label",
        "media_count",
    ])?;
    for record in records {
        writer.write_record([
            record.id.clone(),
            record.tier.to_string(),
            record.title.clone(),
            record.industries.join("|"),
            record.needs.join("|"),
            record.channels.join("|"),
            record.price_label.clone(),
            record.media.len().to_string(),
        ])?;
    }
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}

pub fn options_to_csv(options: &FacetOptions) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(["facet", "option"])?;
    let facets = [
        ("tier", &options.tiers),
        ("industry", &options.industries),
        ("need", &options.needs),
    ];
    for (facet, values) in facets {
        for value in values {
            writer.write_record([facet, value.as_str()])?;
        }
    }
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}
