//! Store-assigned numeric identities.
//!
//! Each record kind gets its own newtype so a question id can never be passed
//! where an option id is expected. On the wire they are plain JSON numbers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
        )]
        #[serde(transparent)]
        #[ts(export)]
        pub struct $name(#[ts(type = "number")] pub i64);

        impl $name {
            pub fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }
    };
}

record_id!(
    /// Identity of a [`Survey`](super::survey::Survey).
    SurveyId
);
record_id!(
    /// Identity of a [`Question`](super::survey::Question), unique across the store.
    QuestionId
);
record_id!(
    /// Identity of a [`QuestionOption`](super::survey::QuestionOption).
    OptionId
);
record_id!(
    /// Identity of a [`Respondent`](super::respondent::Respondent).
    RespondentId
);
