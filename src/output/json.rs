use anyhow::Result;
use serde::Serialize;
use serde_json::{json, Value};

use crate::catalog::SolutionRecord;
use crate::viewer::Carousel;

pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// A record as the detail viewer sees it: the record plus its carousel position.
pub fn detail_value(record: &SolutionRecord, carousel: &Carousel) -> Result<Value> {
    Ok(json!({
        "solution": serde_json::to_value(record)?,
        "media_index": carousel.index(),
        "media_counter": carousel.counter_label(),
    }))
}
