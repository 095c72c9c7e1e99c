use scraper::{ElementRef, Html, Selector};

fn trimmed_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Trimmed text of the first element matching `selector`.
///
/// A missing element is an ordinary outcome and yields `None`.
pub fn extract_field(doc: &Html, selector: &Selector) -> Option<String> {
    doc.select(selector).next().map(trimmed_text)
}
