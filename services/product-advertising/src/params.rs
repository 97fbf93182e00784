use std::fmt::{Display, Formatter};

use amzsign_core::{Error, Result};

use crate::constants::DEFAULT_SEARCH_INDEX;

/// Operation of a product advertising request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Search items by keywords and/or brand.
    ItemSearch,
    /// Look up one item by ASIN.
    ItemLookup,
}

impl Operation {
    /// Name of the response envelope returned for this operation.
    pub fn envelope_name(self) -> &'static str {
        match self {
            Operation::ItemSearch => "ItemSearchResponse",
            Operation::ItemLookup => "ItemLookupResponse",
        }
    }

    /// Find the operation whose envelope is named `name`.
    pub fn from_envelope_name(name: &str) -> Option<Self> {
        match name {
            "ItemSearchResponse" => Some(Operation::ItemSearch),
            "ItemLookupResponse" => Some(Operation::ItemLookup),
            _ => None,
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::ItemSearch => f.write_str("ItemSearch"),
            Operation::ItemLookup => f.write_str("ItemLookup"),
        }
    }
}

/// Parameters of an item search or item lookup.
///
/// Blank values (empty or whitespace only) are treated as absent.
///
/// ```
/// use amzsign_product_advertising::SearchParameters;
///
/// let params = SearchParameters::search(["shirts"])
///     .with_brand("Lacoste")
///     .with_search_index("FashionWomen");
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParameters {
    keywords: Option<Vec<String>>,
    brand: Option<String>,
    search_index: Option<String>,
    asin: Option<String>,
}

impl SearchParameters {
    /// Search by keywords.
    pub fn search<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::default().with_keywords(keywords)
    }

    /// Search by brand only.
    pub fn brand(brand: impl Into<String>) -> Self {
        Self::default().with_brand(brand)
    }

    /// Look up a single item by ASIN.
    pub fn lookup(asin: impl Into<String>) -> Self {
        Self {
            asin: clean(asin.into()),
            ..Default::default()
        }
    }

    /// Split caller text like `"shirts, polo"` into keywords.
    pub fn parse_keywords(input: &str) -> Vec<String> {
        input
            .split(',')
            .filter_map(|v| clean(v.trim().to_string()))
            .collect()
    }

    /// Replace keywords.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .filter_map(|v| clean(v.into()))
            .collect();
        self.keywords = if keywords.is_empty() {
            None
        } else {
            Some(keywords)
        };
        self
    }

    /// Set brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = clean(brand.into());
        self
    }

    /// Set search index, `All` when absent.
    pub fn with_search_index(mut self, search_index: impl Into<String>) -> Self {
        self.search_index = clean(search_index.into());
        self
    }

    /// Keywords, if any.
    pub fn keywords(&self) -> Option<&[String]> {
        self.keywords.as_deref()
    }

    /// Brand, if any.
    pub fn brand_name(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    /// Search index, falling back to `All`.
    pub fn search_index(&self) -> &str {
        self.search_index.as_deref().unwrap_or(DEFAULT_SEARCH_INDEX)
    }

    /// ASIN, if any.
    pub fn asin(&self) -> Option<&str> {
        self.asin.as_deref()
    }

    /// Check the combination of fields and return the operation it describes.
    pub fn validate(&self) -> Result<Operation> {
        let searching = self.keywords.is_some() || self.brand.is_some();

        match (&self.asin, searching) {
            (Some(_), true) => Err(Error::invalid_parameters(
                "asin can't be combined with keywords or brand",
            )),
            (Some(_), false) => Ok(Operation::ItemLookup),
            (None, false) => Err(Error::invalid_parameters(
                "at least one of keywords, brand or asin is required",
            )),
            (None, true) => {
                if self.brand.is_some() && self.search_index.is_none() {
                    return Err(Error::invalid_parameters(
                        "search index is required when searching by brand",
                    ));
                }
                Ok(Operation::ItemSearch)
            }
        }
    }
}

fn clean(v: String) -> Option<String> {
    if v.trim().is_empty() {
        None
    } else {
        Some(v)
    }
}
