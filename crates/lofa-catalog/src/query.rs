//! Typed parameters for product listing requests.

use serde::Deserialize;

pub const DEFAULT_PER_PAGE: u32 = 20;
pub const DEFAULT_PAGE: u32 = 1;
/// Default `limit` for the preset listings (featured, latest, ...).
pub const DEFAULT_PRESET_LIMIT: u32 = 8;
/// Largest `per_page` the WooCommerce REST API accepts.
pub const MAX_PER_PAGE: u32 = 100;

/// Sort key for product listings, as accepted by WooCommerce's `orderby`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderBy {
    #[default]
    Date,
    Modified,
    Id,
    Include,
    /// Storefront links say `name`; WooCommerce calls the product name `title`.
    #[serde(alias = "name")]
    Title,
    Slug,
    Price,
    Popularity,
    Rating,
    MenuOrder,
}

impl OrderBy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OrderBy::Date => "date",
            OrderBy::Modified => "modified",
            OrderBy::Id => "id",
            OrderBy::Include => "include",
            OrderBy::Title => "title",
            OrderBy::Slug => "slug",
            OrderBy::Price => "price",
            OrderBy::Popularity => "popularity",
            OrderBy::Rating => "rating",
            OrderBy::MenuOrder => "menu_order",
        }
    }
}

impl std::str::FromStr for OrderBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = match s {
            "date" => OrderBy::Date,
            "modified" => OrderBy::Modified,
            "id" => OrderBy::Id,
            "include" => OrderBy::Include,
            "title" | "name" => OrderBy::Title,
            "slug" => OrderBy::Slug,
            "price" => OrderBy::Price,
            "popularity" => OrderBy::Popularity,
            "rating" => OrderBy::Rating,
            "menu_order" => OrderBy::MenuOrder,
            other => return Err(format!("unknown orderby \"{other}\"")),
        };
        Ok(parsed)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("unknown order \"{other}\", expected asc or desc")),
        }
    }
}

/// Filters and paging for [`crate::WooCommerceClient::list_products`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub per_page: u32,
    pub page: u32,
    /// Either a numeric category id (`"15"`) or a category slug (`"collares"`).
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub on_sale: Option<bool>,
    pub orderby: OrderBy,
    pub order: SortOrder,
    /// Exact product slug.
    pub slug: Option<String>,
    /// Free-text search, matched upstream.
    pub search: Option<String>,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            page: DEFAULT_PAGE,
            category: None,
            featured: None,
            on_sale: None,
            orderby: OrderBy::default(),
            order: SortOrder::default(),
            slug: None,
            search: None,
        }
    }
}

impl ProductQuery {
    /// Returns the category filter when it is set and non-blank.
    #[must_use]
    pub fn category_filter(&self) -> Option<&str> {
        self.category.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }

    /// Upstream query pairs for this request. `category_id` is the already
    /// resolved numeric category id; the raw `category` field is ignored.
    pub(crate) fn to_params(&self, category_id: Option<u64>) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("per_page", self.per_page.to_string()),
            ("page", self.page.to_string()),
        ];
        if let Some(id) = category_id {
            params.push(("category", id.to_string()));
        }
        if let Some(featured) = self.featured {
            params.push(("featured", featured.to_string()));
        }
        if let Some(on_sale) = self.on_sale {
            params.push(("on_sale", on_sale.to_string()));
        }
        if let Some(slug) = self.slug.as_deref().filter(|s| !s.is_empty()) {
            params.push(("slug", slug.to_owned()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            params.push(("search", search.to_owned()));
        }
        params.push(("orderby", self.orderby.as_str().to_owned()));
        params.push(("order", self.order.as_str().to_owned()));
        params.push(("status", "publish".to_owned()));
        params
    }
}

/// Fixed listings shown on the storefront home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductPreset {
    Featured,
    OnSale,
    Latest,
    BestSelling,
}

impl ProductPreset {
    /// The listing query for this preset, showing at most `limit` products.
    #[must_use]
    pub fn query(self, limit: u32) -> ProductQuery {
        let base = ProductQuery {
            per_page: limit,
            orderby: OrderBy::Date,
            order: SortOrder::Desc,
            ..ProductQuery::default()
        };
        match self {
            ProductPreset::Featured => ProductQuery {
                featured: Some(true),
                ..base
            },
            ProductPreset::OnSale => ProductQuery {
                on_sale: Some(true),
                ..base
            },
            ProductPreset::Latest => base,
            ProductPreset::BestSelling => ProductQuery {
                orderby: OrderBy::Popularity,
                ..base
            },
        }
    }

    /// Path segment used by the HTTP API and CLI, e.g. `"on-sale"`.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            ProductPreset::Featured => "featured",
            ProductPreset::OnSale => "on-sale",
            ProductPreset::Latest => "latest",
            ProductPreset::BestSelling => "best-selling",
        }
    }
}

/// Parses `category` as a plain numeric id. Returns `None` for slugs.
#[must_use]
pub fn parse_category_id(category: &str) -> Option<u64> {
    if category.is_empty() || !category.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    category.parse().ok()
}
