use std::fmt;

use crate::PlaceCandidate;

const SEPARATOR: &str = ", ";

/// The non-empty address fields of a place, in display order.
///
/// Order is street, locality, administrative area, postal code, country.
/// Missing and empty fields are left out entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressComponents {
    parts: Vec<String>,
}

impl AddressComponents {
    /// Collects the non-empty fields of `place`.
    #[must_use]
    pub fn from_candidate(place: &PlaceCandidate) -> Self {
        let parts = [
            &place.street,
            &place.locality,
            &place.administrative_area,
            &place.postal_code,
            &place.country,
        ]
        .into_iter()
        .flatten()
        .filter(|field| !field.is_empty())
        .cloned()
        .collect();
        Self { parts }
    }

    /// Returns `true` if the place had no usable fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Iterates the present fields in display order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(String::as_str)
    }

    /// The display string, or `None` when no field is present.
    #[must_use]
    pub fn to_display(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.parts.join(SEPARATOR))
        }
    }
}

impl From<&PlaceCandidate> for AddressComponents {
    fn from(place: &PlaceCandidate) -> Self {
        Self::from_candidate(place)
    }
}

impl fmt::Display for AddressComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.parts.join(SEPARATOR))
    }
}
