use crate::{error::ExtractionError, plants::PlantDetail, query, Config, Shop};
use lazy_static::lazy_static;
use scraper::{Html, Selector};

const E: &str = "Invalid selector";
lazy_static! {
    static ref ITEM_CONTAINER: Selector = Selector::parse("div.grid-product__content").expect(E);
    static ref A: Selector = Selector::parse("a").expect(E);
    static ref TITLE: Selector =
        Selector::parse(r#"h1[class="h2 product-single__title"]"#).expect(E);
}

/// Shopify style plant collection: product cards on listing pages, a single
/// product heading on detail pages.
#[derive(Debug)]
pub struct PlantShop {
    config: Config,
}

impl PlantShop {
    pub fn new(config: &Config) -> Self {
        PlantShop {
            config: config.clone(),
        }
    }
}

impl Shop for PlantShop {
    type Detail = PlantDetail;

    fn extract_links(&self, doc: &Html) -> Result<Vec<String>, ExtractionError> {
        doc.select(&ITEM_CONTAINER)
            .enumerate()
            .map(|(index, card)| -> Result<String, ExtractionError> {
                let anchor = card
                    .select(&A)
                    .next()
                    .ok_or(ExtractionError::MissingAnchor { index })?;
                let href = anchor
                    .value()
                    .attr("href")
                    .ok_or(ExtractionError::MissingHref { index })?;
                Ok(self.config.absolute_url(href))
            })
            .collect()
    }

    fn extract_detail(&self, doc: &Html) -> Self::Detail {
        PlantDetail {
            title: query::extract_field(doc, &TITLE),
        }
    }
}
