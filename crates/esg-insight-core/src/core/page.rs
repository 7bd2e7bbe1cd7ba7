// crates/esg-insight-core/src/core/page.rs
// ============================================================================
// Module: ESG Insight Pagination
// Description: Standardized page envelope for paginated API listings.
// Purpose: Derive page metadata deterministically from content and totals.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! [`PageResponse`] is the single envelope every paginated listing uses. All
//! metadata (`totalPages`, `first`, `last`, `empty`) is computed from the
//! inputs at construction; there is no way to build an envelope whose flags
//! disagree with its content.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::error::InvalidArgument;

// ============================================================================
// SECTION: Page Envelope
// ============================================================================

/// One page of a paginated listing.
///
/// # Invariants
/// - `content.len() <= size`.
/// - `empty == content.is_empty()`.
/// - `total_pages == ceil(total_elements / size)` when `size > 0`, else `0`.
/// - `first == (page == 0)`.
/// - `last == (page == total_pages - 1)`, or `page == 0` when there are no
///   pages at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    /// Items on this page, in listing order.
    pub content: Vec<T>,
    /// Zero-based page index.
    pub page: u32,
    /// Maximum number of items per page.
    pub size: u32,
    /// Total number of items across all pages.
    pub total_elements: u64,
    /// Total number of pages.
    pub total_pages: u32,
    /// Whether this is the first page.
    pub first: bool,
    /// Whether this is the last page.
    pub last: bool,
    /// Whether this page carries no items.
    pub empty: bool,
}

impl<T> PageResponse<T> {
    /// Builds a page envelope, deriving all metadata from the inputs.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::ZeroPageSize`] when `size` is zero while
    /// elements exist, [`InvalidArgument::ContentOverflow`] when `content`
    /// holds more items than `size`, and
    /// [`InvalidArgument::PageCountOverflow`] when the derived page count
    /// does not fit the wire representation.
    pub fn new(
        content: Vec<T>,
        page: u32,
        size: u32,
        total_elements: u64,
    ) -> Result<Self, InvalidArgument> {
        if size == 0 && total_elements > 0 {
            return Err(InvalidArgument::ZeroPageSize);
        }
        let count = u64::try_from(content.len()).unwrap_or(u64::MAX);
        if count > u64::from(size) {
            return Err(InvalidArgument::ContentOverflow {
                count,
                size,
            });
        }
        let total_pages = if size == 0 {
            0
        } else {
            let pages = total_elements.div_ceil(u64::from(size));
            u32::try_from(pages).map_err(|_| InvalidArgument::PageCountOverflow)?
        };
        let empty = content.is_empty();
        Ok(Self {
            content,
            page,
            size,
            total_elements,
            total_pages,
            first: page == 0,
            last: if total_pages == 0 { page == 0 } else { page == total_pages - 1 },
            empty,
        })
    }

    /// Pages a full collection, returning the envelope for the requested
    /// window.
    ///
    /// Pages past the end of the collection yield an empty content list with
    /// metadata still describing the whole collection.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::ZeroPageSize`] when `size` is zero while
    /// the collection is non-empty.
    pub fn paginate(items: Vec<T>, page: u32, size: u32) -> Result<Self, InvalidArgument> {
        let total_elements =
            u64::try_from(items.len()).map_err(|_| InvalidArgument::PageCountOverflow)?;
        if size == 0 && total_elements > 0 {
            return Err(InvalidArgument::ZeroPageSize);
        }
        let start = u64::from(page).saturating_mul(u64::from(size));
        let window: Vec<T> = if start >= total_elements {
            Vec::new()
        } else {
            let start = usize::try_from(start).map_err(|_| InvalidArgument::PageCountOverflow)?;
            let take = usize::try_from(size).map_err(|_| InvalidArgument::PageCountOverflow)?;
            items.into_iter().skip(start).take(take).collect()
        };
        Self::new(window, page, size, total_elements)
    }

    /// Converts the content type while preserving all page metadata.
    ///
    /// Mirrors how producers translate storage records into wire records one
    /// page at a time.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResponse<U> {
        PageResponse {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            first: self.first,
            last: self.last,
            empty: self.empty,
        }
    }
}
