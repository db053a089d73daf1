// Adapters layer: concrete implementations of the domain ports.

pub mod html;
pub mod json;
pub mod storage;

use crate::config::OutputFormat;
use crate::domain::ports::PageSerializer;

pub fn serializer_for(format: OutputFormat, title: &str) -> Box<dyn PageSerializer> {
    match format {
        OutputFormat::Html => Box::new(html::HtmlSerializer::new(title)),
        OutputFormat::Json => Box::new(json::JsonSerializer),
    }
}
