use std::fmt;

use serde_json::Value;

use super::{Guard, GuardContext};
use crate::server::{
    error::guard::GuardError,
    util::parse::{parse_integer, parse_truth_value},
};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_ITEMS_PER_PAGE: u64 = 100;

/// Field to sort by and its direction.
///
/// Displays as the signed key `field` when ascending and `-field` when descending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub ascending: bool,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ascending {
            write!(f, "{}", self.field)
        } else {
            write!(f, "-{}", self.field)
        }
    }
}

/// Validated paging and sorting parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number.
    pub page: u64,
    pub items_per_page: u64,
    pub sort: SortKey,
    /// True when the request carried `page` or `items_per_page` itself.
    pub explicit: bool,
}

/// Validates `sort_by`, `page`, `items_per_page` and `is_ascending`, storing the result
/// in `ctx.pagination`.
pub struct PaginationGuard {
    default_sort_by: String,
    fields: Vec<String>,
    default_page: u64,
    default_items_per_page: u64,
    default_is_ascending: bool,
}

impl PaginationGuard {
    /// Creates a guard sorting by `default_sort_by` and allowing any of `fields`.
    ///
    /// Defaults: page 1, 100 items per page, descending.
    pub fn new<I, S>(default_sort_by: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            default_sort_by: default_sort_by.into(),
            fields: fields.into_iter().map(Into::into).collect(),
            default_page: DEFAULT_PAGE,
            default_items_per_page: DEFAULT_ITEMS_PER_PAGE,
            default_is_ascending: false,
        }
    }

    /// Sets the page used when the request has none. Values below 1 are raised to 1.
    pub fn default_page(mut self, page: u64) -> Self {
        self.default_page = page.max(1);
        self
    }

    /// Sets the page size used when the request has none. Values below 1 are raised to 1.
    pub fn default_items_per_page(mut self, items_per_page: u64) -> Self {
        self.default_items_per_page = items_per_page.max(1);
        self
    }

    pub fn default_is_ascending(mut self, ascending: bool) -> Self {
        self.default_is_ascending = ascending;
        self
    }

    fn positive(
        value: Option<&Value>,
        default: u64,
        param: &'static str,
    ) -> Result<u64, GuardError> {
        let Some(value) = value else {
            return Ok(default);
        };

        parse_integer(value)
            .filter(|n| *n >= 1)
            .map(|n| n as u64)
            .ok_or(GuardError::InvalidPagination(param))
    }
}

impl Guard for PaginationGuard {
    fn check(&self, ctx: &mut GuardContext) -> Result<(), GuardError> {
        let sort_by = match ctx.data.get("sort_by") {
            None => self.default_sort_by.clone(),
            Some(Value::String(field)) => field.clone(),
            Some(_) => return Err(GuardError::InvalidPagination("sort_by")),
        };

        if !self.fields.contains(&sort_by) {
            return Err(GuardError::InvalidPagination("sort_by"));
        }

        let page = Self::positive(ctx.data.get("page"), self.default_page, "page")?;

        let items_per_page = Self::positive(
            ctx.data.get("items_per_page"),
            self.default_items_per_page,
            "items_per_page",
        )?;

        // The row offset of the page must fit a signed 64-bit SQL integer.
        let in_range = (page - 1)
            .checked_mul(items_per_page)
            .is_some_and(|offset| offset <= i64::MAX as u64);
        if !in_range {
            return Err(GuardError::InvalidPagination("page"));
        }

        let ascending = match ctx.data.get("is_ascending") {
            None => self.default_is_ascending,
            Some(value) => {
                parse_truth_value(value).ok_or(GuardError::InvalidPagination("is_ascending"))?
            }
        };

        let explicit = ctx.data.contains_key("page") || ctx.data.contains_key("items_per_page");

        ctx.pagination = Some(Pagination {
            page,
            items_per_page,
            sort: SortKey {
                field: sort_by,
                ascending,
            },
            explicit,
        });

        Ok(())
    }
}
