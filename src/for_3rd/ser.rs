//! Serialization of ScaledNumber.
//! Serialization to a string uses the default suffix form.

use crate::num::ScaledNumber;
use serde::{Serialize, Serializer};

impl Serialize for ScaledNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
