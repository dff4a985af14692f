//! Closed enumerations that index the QA status table.
//!
//! Every enum here is fieldless and dense, so `index()` is a valid array
//! index and values outside the set cannot be constructed. Raw integers and
//! names coming from outside the crate go through `TryFrom<i32>` or
//! `from_name`, which return [`QaError`](crate::errors::QaError).

/// Defines a dense QA enum with its display labels and lookup helpers.
macro_rules! qa_enum {
    (
        $(#[$meta:meta])*
        $name:ident, kind = $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $label)] $variant ),+
        }

        impl $name {
            /// All variants in index order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Number of variants.
            pub const COUNT: usize = Self::ALL.len();

            /// Dense zero-based index.
            pub fn index(self) -> usize {
                self as usize
            }

            /// Display label.
            pub fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }

            /// Variant at a dense index, if any.
            pub fn from_index(index: usize) -> Option<Self> {
                Self::ALL.get(index).copied()
            }

            /// Look up a variant by label, ignoring ASCII case.
            pub fn from_name(name: &str) -> Result<Self, $crate::errors::QaError> {
                let trimmed = name.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| $crate::errors::QaError::UnknownName {
                        kind: $kind,
                        name: name.to_string(),
                    })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::errors::QaError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_name(s)
            }
        }
    };
}

/// Implements `TryFrom<i32>` for an enum whose raw form is its dense index.
macro_rules! try_from_index {
    ($name:ident, $err:ident) => {
        impl TryFrom<i32> for $name {
            type Error = $crate::errors::QaError;

            fn try_from(value: i32) -> Result<Self, $crate::errors::QaError> {
                usize::try_from(value)
                    .ok()
                    .and_then(Self::from_index)
                    .ok_or($crate::errors::QaError::$err {
                        value,
                        max: Self::COUNT,
                    })
            }
        }
    };
}

mod detector;
mod event_specie;
mod qa_bit;
mod task;

pub use detector::Detector;
pub use event_specie::EventSpecie;
pub use qa_bit::QaBit;
pub use task::{Task, TaskIndex};
