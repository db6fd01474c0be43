use anyhow::{Result, bail};
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};

use crate::models::ProductRecord;

const E: &str = "invalid selector";
lazy_static! {
    // Listing pages.
    static ref OFFERS_LIST: Selector = Selector::parse("ul.js-main-offers-list").expect(E);
    static ref OFFER_LINK: Selector =
        Selector::parse("figure.offer-thumb a.offer-thumb__link").expect(E);
    static ref PAGE_COUNT: Selector = Selector::parse("span.page-count").expect(E);
    // Detail pages.
    static ref TITLE: Selector = Selector::parse("h1.item-summary__title").expect(E);
    static ref PRICE: Selector = Selector::parse("span.item-price__amount").expect(E);
    static ref DESCRIPTION: Selector = Selector::parse("div.item-description").expect(E);
    static ref SELLER: Selector = Selector::parse("span.item-seller__name").expect(E);
    static ref CONDITION: Selector = Selector::parse("span.item-condition").expect(E);
    static ref MAIN_IMG: Selector = Selector::parse("figure.item-gallery__main img").expect(E);
}

/// What to do when a detail page is missing an expected field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldPolicy {
    /// Substitute an empty string and keep scraping.
    #[default]
    Substitute,
    /// Fail the run with an error naming the field.
    Strict,
}

/// Detail-page links from a listing page, in page order.
///
/// When a promoted strip is shown the page carries two offer lists and the
/// main one is the second. An unrecognized layout or an empty category
/// yields no links rather than an error.
pub fn detail_links(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let lists: Vec<ElementRef> = doc.select(&OFFERS_LIST).collect();
    let Some(main_list) = lists.get(1).or_else(|| lists.first()) else {
        return Vec::new();
    };
    main_list
        .select(&OFFER_LINK)
        .filter_map(|a| a.value().attr("href"))
        .map(|href| href.trim().to_string())
        .collect()
}

/// Number of listing pages the category page advertises. A missing or
/// unparsable counter means a single page.
pub fn page_count(html: &str) -> usize {
    Html::parse_document(html)
        .select(&PAGE_COUNT)
        .next()
        .and_then(|el| el.text().collect::<String>().trim().parse().ok())
        .unwrap_or(1)
}

/// Extract a product record from a detail page.
pub fn parse_product(url: &str, html: &str, policy: FieldPolicy) -> Result<ProductRecord> {
    let doc = Html::parse_document(html);

    let title = required_field(&doc, &TITLE, "title", url, policy)?;
    let price = required_field(&doc, &PRICE, "price", url, policy)?;

    Ok(ProductRecord {
        url: url.to_string(),
        title,
        price,
        description: select_text(&doc, &DESCRIPTION),
        seller: select_text(&doc, &SELLER),
        condition: select_text(&doc, &CONDITION),
        img_href: doc
            .select(&MAIN_IMG)
            .next()
            .and_then(|img| img.value().attr("src"))
            .map(str::to_string),
    })
}

fn select_text(doc: &Html, selector: &Selector) -> Option<String> {
    doc.select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

fn required_field(
    doc: &Html,
    selector: &Selector,
    name: &str,
    url: &str,
    policy: FieldPolicy,
) -> Result<String> {
    match select_text(doc, selector) {
        Some(text) => Ok(text),
        None => match policy {
            FieldPolicy::Substitute => Ok(String::new()),
            FieldPolicy::Strict => bail!("detail page {url} is missing the {name} field"),
        },
    }
}
