//! Response envelope parsing.
//!
//! Bodies are decoded into typed nodes where every branch is optional, so an
//! absent element never fails decoding. Missing envelope pieces that the
//! caller relies on are reported as [`ErrorKind::MalformedResponse`].
//!
//! [`ErrorKind::MalformedResponse`]: amzsign_core::ErrorKind::MalformedResponse

use std::fmt::{Display, Formatter};

use amzsign_core::{Error, Result};
use log::{debug, warn};
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::{Deserialize, Serialize};

use crate::constants::{NO_PRICE, TECHNICAL_DETAILS};
use crate::params::Operation;

/// Parsed response envelope.
#[derive(Debug, Clone)]
pub struct Envelope {
    operation: Operation,
    items: Option<Items>,
}

impl Envelope {
    /// Operation named by the root element.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// The `Items` node, if present.
    pub fn items(&self) -> Option<&Items> {
        self.items.as_ref()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct RawEnvelope {
    items: Option<Items>,
}

/// `Items` node of an envelope.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Items {
    /// Echo of the request, carries upstream errors.
    pub request: Option<RequestNode>,
    /// Returned items. A lone `Item` becomes a one element list.
    #[serde(rename = "Item")]
    pub item: Vec<Item>,
}

/// `Items.Request` node.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RequestNode {
    /// Errors reported for the request.
    pub errors: Option<Errors>,
}

/// `Items.Request.Errors` node.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Errors {
    /// Each `Error` child in document order.
    pub error: Vec<ErrorNode>,
}

/// A single upstream error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ErrorNode {
    /// Error code like `AWS.InvalidParameterValue`.
    pub code: Option<String>,
    /// Human readable message.
    pub message: Option<String>,
}

/// An item node.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Item {
    /// Amazon standard identification number.
    #[serde(rename = "ASIN")]
    pub asin: Option<String>,
    /// Product page url.
    #[serde(rename = "DetailPageURL")]
    pub detail_page_url: Option<String>,
    /// Related links of this item.
    pub item_links: Option<ItemLinks>,
    /// Large product image.
    pub large_image: Option<Image>,
    /// Title and prices.
    pub item_attributes: Option<ItemAttributes>,
}

/// `Item.ItemLinks` node.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ItemLinks {
    /// Each `ItemLink` child.
    pub item_link: Vec<ItemLink>,
}

/// A described link of an item.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ItemLink {
    /// Link description like `Technical Details`.
    pub description: Option<String>,
    /// Link target.
    #[serde(rename = "URL")]
    pub url: Option<String>,
}

/// An image node.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Image {
    /// Image url.
    #[serde(rename = "URL")]
    pub url: Option<String>,
}

/// `Item.ItemAttributes` node.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ItemAttributes {
    /// Item title.
    pub title: Option<String>,
    /// List price, preferred over the trade in value.
    pub list_price: Option<Price>,
    /// Trade in value.
    pub trade_in_value: Option<Price>,
}

/// A price node.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Price {
    /// Display form like `$12.00`.
    pub formatted_price: Option<String>,
}

/// Error embedded in an otherwise valid response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamError {
    /// Error code like `AWS.InvalidParameterValue`.
    pub code: Option<String>,
    /// Human readable message.
    pub message: String,
}

impl Display for UpstreamError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{code}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Flat display fields of one item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemRecord {
    /// Amazon standard identification number.
    #[serde(rename = "ASIN", skip_serializing_if = "Option::is_none")]
    pub asin: Option<String>,
    /// Product page url.
    #[serde(rename = "DetailPageURL", skip_serializing_if = "Option::is_none")]
    pub detail_page_url: Option<String>,
    /// Url of the first `Technical Details` link.
    #[serde(rename = "TechnicalDetailsURL", skip_serializing_if = "Option::is_none")]
    pub technical_details_url: Option<String>,
    /// Url of the large image.
    #[serde(rename = "LargeImageURL", skip_serializing_if = "Option::is_none")]
    pub large_image_url: Option<String>,
    /// Item title.
    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Formatted price, or `No Price`.
    #[serde(rename = "Price")]
    pub price: String,
}

/// One entry of a result sequence.
///
/// Serializes to the flat item mapping, or to `{"ERROR": message}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResultRecord {
    /// A normalized item.
    Item(ItemRecord),
    /// An upstream error.
    Error {
        /// Upstream error message.
        #[serde(rename = "ERROR")]
        message: String,
    },
}

impl ResultRecord {
    /// Returns true if this record carries an upstream error.
    pub fn is_error(&self) -> bool {
        matches!(self, ResultRecord::Error { .. })
    }
}

impl From<UpstreamError> for ResultRecord {
    fn from(err: UpstreamError) -> Self {
        ResultRecord::Error {
            message: err.message,
        }
    }
}

/// Parse a response body into an [`Envelope`].
///
/// The root element must be `ItemSearchResponse` or `ItemLookupResponse`.
pub fn parse_envelope(body: &str) -> Result<Envelope> {
    let root = root_element(body)?;
    let operation = Operation::from_envelope_name(&root).ok_or_else(|| {
        Error::malformed_response("response is not an item search or item lookup envelope")
            .with_context(format!("root: {root}"))
    })?;

    let raw: RawEnvelope = quick_xml::de::from_str(body).map_err(|e| {
        Error::malformed_response("failed to decode response envelope").with_source(e)
    })?;
    debug!("parsed {} envelope", operation.envelope_name());

    Ok(Envelope {
        operation,
        items: raw.items,
    })
}

fn root_element(body: &str) -> Result<String> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Ok(String::from_utf8_lossy(e.local_name().as_ref()).into_owned())
            }
            Ok(Event::Eof) => {
                return Err(Error::malformed_response("response body has no root element"))
            }
            Ok(_) => continue,
            Err(e) => {
                return Err(
                    Error::malformed_response("response body is not valid xml").with_source(e)
                )
            }
        }
    }
}

/// Look for `Items.Request.Errors.Error` and return it when present.
pub fn extract_error(envelope: &Envelope) -> std::result::Result<(), UpstreamError> {
    let Some(node) = envelope
        .items
        .as_ref()
        .and_then(|v| v.request.as_ref())
        .and_then(|v| v.errors.as_ref())
        .and_then(|v| v.error.first())
    else {
        return Ok(());
    };

    Err(UpstreamError {
        code: node.code.clone(),
        message: node
            .message
            .clone()
            .unwrap_or_else(|| "Unknown Error".to_string()),
    })
}

/// Reduce an item node into its flat display fields.
pub fn normalize(item: &Item) -> ItemRecord {
    let attributes = item.item_attributes.as_ref();

    let technical_details_url = item
        .item_links
        .iter()
        .flat_map(|v| v.item_link.iter())
        .find(|v| v.description.as_deref() == Some(TECHNICAL_DETAILS))
        .and_then(|v| v.url.clone());

    let price = attributes
        .and_then(|v| formatted_price(v.list_price.as_ref()))
        .or_else(|| attributes.and_then(|v| formatted_price(v.trade_in_value.as_ref())))
        .unwrap_or_else(|| NO_PRICE.to_string());

    ItemRecord {
        asin: item.asin.clone(),
        detail_page_url: item.detail_page_url.clone(),
        technical_details_url,
        large_image_url: item.large_image.as_ref().and_then(|v| v.url.clone()),
        title: attributes.and_then(|v| v.title.clone()),
        price,
    }
}

fn formatted_price(price: Option<&Price>) -> Option<String> {
    price.and_then(|v| v.formatted_price.clone())
}

/// Parse an item search body into result records.
///
/// An upstream error yields a single [`ResultRecord::Error`].
pub fn parse_search_response(body: &str) -> Result<Vec<ResultRecord>> {
    let envelope = parse_expected(body, Operation::ItemSearch)?;
    if let Err(err) = extract_error(&envelope) {
        warn!("item search returned upstream error: {err}");
        return Ok(vec![err.into()]);
    }

    let items = required_items(&envelope)?;
    Ok(items
        .item
        .iter()
        .map(|v| ResultRecord::Item(normalize(v)))
        .collect())
}

/// Parse an item lookup body into its single result record.
pub fn parse_lookup_response(body: &str) -> Result<ResultRecord> {
    let envelope = parse_expected(body, Operation::ItemLookup)?;
    if let Err(err) = extract_error(&envelope) {
        warn!("item lookup returned upstream error: {err}");
        return Ok(err.into());
    }

    let item = required_items(&envelope)?
        .item
        .first()
        .ok_or_else(|| Error::malformed_response("item lookup response contains no Item"))?;
    Ok(ResultRecord::Item(normalize(item)))
}

fn parse_expected(body: &str, expected: Operation) -> Result<Envelope> {
    let envelope = parse_envelope(body)?;
    if envelope.operation != expected {
        return Err(Error::malformed_response(format!(
            "expected {} but got {}",
            expected.envelope_name(),
            envelope.operation.envelope_name()
        )));
    }
    Ok(envelope)
}

fn required_items(envelope: &Envelope) -> Result<&Items> {
    envelope.items.as_ref().ok_or_else(|| {
        Error::malformed_response(format!(
            "{} contains no Items",
            envelope.operation.envelope_name()
        ))
    })
}
