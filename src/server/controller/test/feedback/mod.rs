use super::*;
use crate::server::data::feedback::FeedbackRepository;
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod get_feedback;
