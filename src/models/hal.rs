//! HATEOAS response documents: items and collections with `_links`.

use serde::Serialize;
use uuid::Uuid;

use crate::models::clothing_item::{ClothingItem, ClothingItemSummary};
use crate::models::pagination::PaginationResult;

/// Path of the clothing collection, relative to the base URL.
pub const COLLECTION_PATH: &str = "/Clothing";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Link {
    pub href: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageLink {
    pub page: i64,
    pub href: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
    pub collection: Link,
}

impl ItemLinks {
    pub fn new(base_url: &str, id: Uuid) -> Self {
        Self {
            self_link: Link {
                href: format!("{base_url}{COLLECTION_PATH}/{id}"),
            },
            collection: Link {
                href: collection_href(base_url, ""),
            },
        }
    }
}

/// A full item plus its navigation links.
#[derive(Debug, Clone, Serialize)]
pub struct ItemDocument {
    #[serde(flatten)]
    pub item: ClothingItem,
    #[serde(rename = "_links")]
    pub links: ItemLinks,
}

impl ItemDocument {
    pub fn new(item: ClothingItem, base_url: &str) -> Self {
        let links = ItemLinks::new(base_url, item.id);
        Self { item, links }
    }
}

/// One row of a collection listing.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryDocument {
    #[serde(flatten)]
    pub item: ClothingItemSummary,
    #[serde(rename = "_links")]
    pub links: ItemLinks,
}

#[derive(Debug, Clone, Serialize)]
pub struct CollectionLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaginationLinks {
    pub first: PageLink,
    pub last: PageLink,
    pub previous: PageLink,
    pub next: PageLink,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub current_page: i64,
    pub current_items: i64,
    pub total_pages: i64,
    pub total_items: i64,
    #[serde(rename = "_links")]
    pub links: PaginationLinks,
}

impl PaginationInfo {
    pub fn new(total: i64, pagination: &PaginationResult, base_url: &str) -> Self {
        let current = pagination.current_page;
        let pages = pagination.number_of_pages;
        let in_range = current <= pages;

        Self {
            current_page: current,
            current_items: pagination.current_item_count,
            total_pages: pages,
            total_items: total,
            links: PaginationLinks {
                first: PageLink {
                    page: 1,
                    href: collection_href(base_url, &pagination.first_query),
                },
                last: PageLink {
                    page: pages,
                    href: collection_href(base_url, &pagination.last_query),
                },
                previous: PageLink {
                    page: if in_range { current } else { current - 1 },
                    href: collection_href(base_url, &pagination.previous_query),
                },
                next: PageLink {
                    page: if in_range { current } else { current + 1 },
                    href: collection_href(base_url, &pagination.next_query),
                },
            },
        }
    }
}

/// Body of `GET /Clothing`.
#[derive(Debug, Clone, Serialize)]
pub struct CollectionDocument {
    pub items: Vec<SummaryDocument>,
    #[serde(rename = "_links")]
    pub links: CollectionLinks,
    pub pagination: PaginationInfo,
}

impl CollectionDocument {
    pub fn new(
        items: Vec<ClothingItemSummary>,
        total: i64,
        pagination: &PaginationResult,
        base_url: &str,
    ) -> Self {
        let items = items
            .into_iter()
            .map(|item| SummaryDocument {
                links: ItemLinks::new(base_url, item.id),
                item,
            })
            .collect();

        Self {
            items,
            links: CollectionLinks {
                self_link: Link {
                    href: collection_href(base_url, ""),
                },
            },
            pagination: PaginationInfo::new(total, pagination, base_url),
        }
    }
}

fn collection_href(base_url: &str, query: &str) -> String {
    format!("{base_url}{COLLECTION_PATH}{query}")
}
