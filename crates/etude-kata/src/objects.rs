//! Serialization helpers and the classic rectangle-with-area constructor.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A width by height rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Construct from extents.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Area of the rectangle.
    #[must_use]
    pub fn area(self) -> f64 {
        self.width * self.height
    }
}

/// Serialize any value to its JSON string form.
///
/// # Errors
///
/// Propagates the underlying serialization failure, e.g. a map with
/// non-string keys or a `Serialize` impl that errors.
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

/// Reconstruct a typed value from its JSON string form.
///
/// ```
/// use etude_kata::objects::{Rectangle, from_json};
///
/// let rect: Rectangle = from_json(r#"{"width":10.0,"height":20.0}"#).unwrap();
/// assert!((rect.area() - 200.0).abs() < 1e-9);
/// ```
///
/// # Errors
///
/// Propagates the underlying parse failure for malformed JSON or JSON whose
/// shape does not match `T`.
pub fn from_json<T: DeserializeOwned>(json: &str) -> serde_json::Result<T> {
    serde_json::from_str(json)
}
