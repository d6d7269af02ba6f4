//! Feedback domain models and parameters.
//!
//! Provides the domain model returned by the repository, the parameters for creating
//! feedback from guarded request data, and the sort options accepted when listing.

use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    model::feedback::FeedbackDto,
    server::{
        error::guard::GuardError,
        middleware::guard::{Pagination, RequestData},
        util::parse::parse_integer,
    },
};

/// Stored feedback record.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub id: Uuid,
    pub rating: Option<i32>,
    pub text: Option<String>,
    pub date_created: DateTime<Utc>,
}

impl Feedback {
    pub fn into_dto(self) -> FeedbackDto {
        FeedbackDto {
            id: self.id,
            rating: self.rating,
            text: self.text,
            date_created: self.date_created,
        }
    }

    /// Converts an entity model to a feedback domain model at the repository boundary.
    pub fn from_entity(entity: entity::feedback::Model) -> Self {
        Self {
            id: entity.id,
            rating: entity.rating,
            text: entity.text,
            date_created: entity.date_created,
        }
    }
}

/// Parameters for creating feedback.
///
/// The ID and creation time are assigned by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateFeedbackParam {
    pub rating: Option<i32>,
    pub text: Option<String>,
}

impl CreateFeedbackParam {
    /// Converts normalized request data into creation parameters.
    ///
    /// `rating` may be a JSON integer, a numeric string or `null`; it must be a
    /// non-negative integer. `text` may be a string or `null`. Absent keys are
    /// treated as `null`.
    ///
    /// # Returns
    /// - `Ok(CreateFeedbackParam)` - Both fields converted
    /// - `Err(GuardError::FieldType)` - A field holds a value of the wrong type
    pub fn from_data(data: &RequestData) -> Result<Self, GuardError> {
        let rating = match data.get("rating") {
            None | Some(Value::Null) => None,
            Some(value) => Some(
                parse_integer(value)
                    .filter(|n| *n >= 0)
                    .and_then(|n| i32::try_from(n).ok())
                    .ok_or_else(|| GuardError::FieldType {
                        field: "rating".to_string(),
                        expected: "Integer",
                    })?,
            ),
        };

        let text = match data.get("text") {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text.clone()),
            Some(_) => {
                return Err(GuardError::FieldType {
                    field: "text".to_string(),
                    expected: "String",
                })
            }
        };

        Ok(Self { rating, text })
    }
}

/// Columns feedback can be listed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackSortField {
    DateCreated,
    Rating,
}

impl FeedbackSortField {
    /// Names accepted in the `sort_by` request parameter.
    pub const NAMES: [&'static str; 2] = ["date_created", "rating"];

    pub fn name(self) -> &'static str {
        match self {
            Self::DateCreated => "date_created",
            Self::Rating => "rating",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "date_created" => Some(Self::DateCreated),
            "rating" => Some(Self::Rating),
            _ => None,
        }
    }
}

/// Parameters for listing feedback.
#[derive(Debug, Clone, PartialEq)]
pub struct ListFeedbackParam {
    pub sort_by: FeedbackSortField,
    pub ascending: bool,
    /// 1-based page and page size, `None` to list every record.
    pub page: Option<(u64, u64)>,
}

impl Default for ListFeedbackParam {
    /// Newest first, unpaged.
    fn default() -> Self {
        Self {
            sort_by: FeedbackSortField::DateCreated,
            ascending: false,
            page: None,
        }
    }
}

impl ListFeedbackParam {
    /// Builds list parameters from validated pagination.
    ///
    /// Paging only applies when the request asked for a page explicitly.
    pub fn from_pagination(pagination: &Pagination) -> Result<Self, GuardError> {
        let sort_by = FeedbackSortField::from_name(&pagination.sort.field)
            .ok_or(GuardError::InvalidPagination("sort_by"))?;

        Ok(Self {
            sort_by,
            ascending: pagination.sort.ascending,
            page: pagination
                .explicit
                .then_some((pagination.page, pagination.items_per_page)),
        })
    }
}
