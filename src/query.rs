//! Read-only views over the records: filter, order newest first, paginate.

use chrono::NaiveDate;
use serde::Serialize;

use crate::dto::{Category, Transaction};
use crate::error::ValidationError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub category: Option<Category>,
    /// Inclusive.
    pub start_date: Option<NaiveDate>,
    /// Inclusive.
    pub end_date: Option<NaiveDate>,
}

impl Filter {
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn between(mut self, start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    /// Category selection as a filter panel submits it: empty or `"all"` clears it.
    pub fn category_name(mut self, name: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        self.category = if name.is_empty() || name.eq_ignore_ascii_case("all") {
            None
        } else {
            Some(name.parse()?)
        };
        Ok(self)
    }

    pub fn matches(&self, transaction: &Transaction) -> bool {
        self.category.map_or(true, |c| transaction.category == c)
            && self.start_date.map_or(true, |d| transaction.date >= d)
            && self.end_date.map_or(true, |d| transaction.date <= d)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    pub const DEFAULT_PAGE_SIZE: usize = 10;

    /// `page` is 1-based; both values must be at least 1.
    pub fn new(page: usize, page_size: usize) -> Result<Self, ValidationError> {
        if page == 0 || page_size == 0 {
            return Err(ValidationError::InvalidPage { page, page_size });
        }
        Ok(Self { page, page_size })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Matches before pagination.
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

impl<T> Page<T> {
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }
}

/// Filters `records`, sorts them by date descending (ties by ascending id), and
/// cuts out the requested page. A page past the end is empty, not an error.
pub fn query<'a, I>(records: I, filter: &Filter, request: PageRequest) -> Page<Transaction>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut matching: Vec<&Transaction> = records
        .into_iter()
        .filter(|transaction| filter.matches(transaction))
        .collect();
    matching.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));

    let total = matching.len();
    let items = matching
        .into_iter()
        .skip(request.offset())
        .take(request.page_size)
        .cloned()
        .collect();

    Page {
        items,
        total,
        page: request.page,
        page_size: request.page_size,
    }
}
