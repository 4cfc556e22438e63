// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for the fallible corners of the crate.
//!
//! The numeric core never fails: degenerate input propagates as IEEE-754
//! infinities and NaNs. Only parsing of user-supplied configuration strings
//! (number styles and locale tags) can be rejected.

use thiserror::Error;

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned when parsing formatting configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The numeric format style string was not understood.
    #[error("Invalid numeric format style '{style}': {reason}")]
    InvalidFormatStyle {
        /// The style string as supplied by the caller.
        style: String,
        /// Why the style was rejected.
        reason: &'static str,
    },
    /// The requested precision exceeds what a format style supports.
    #[error("Precision {precision} is out of range (maximum {max})")]
    PrecisionOutOfRange {
        /// The requested number of digits.
        precision: u32,
        /// The largest accepted number of digits.
        max: u32,
    },
    /// No locale is registered under the given tag.
    #[error("Unknown locale tag '{0}'")]
    UnknownLocale(String),
}
