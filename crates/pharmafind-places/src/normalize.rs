//! Conversion from Places API wire types into domain records.

use pharmafind_core::{Coordinates, OpeningHours, PlaceCandidate, PlaceDetails, Review};

use crate::types::{ApiPlace, ApiReview, PlaceDetailsResponse};

/// Convert a search hit into a [`PlaceCandidate`].
///
/// Returns `None` for hits without a location, since no distance can be
/// computed for them.
#[must_use]
pub fn normalize_place(place: ApiPlace) -> Option<PlaceCandidate> {
    let Some(location) = place.location else {
        tracing::debug!(id = ?place.id, "dropping search hit without a location");
        return None;
    };

    Some(PlaceCandidate {
        id: place.id.filter(|id| !id.is_empty()),
        name: place
            .display_name
            .map(|n| n.text)
            .unwrap_or_default(),
        address: place.formatted_address.unwrap_or_default(),
        location: Coordinates {
            lat: location.latitude,
            lng: location.longitude,
        },
    })
}

/// Convert a detail response into [`PlaceDetails`].
///
/// A review without a rating is kept with rating `0`, which the histogram
/// treats as out of range.
#[must_use]
pub fn normalize_details(details: PlaceDetailsResponse) -> PlaceDetails {
    PlaceDetails {
        rating: details.rating,
        user_ratings_total: details.user_rating_count.unwrap_or(0),
        reviews: details.reviews.into_iter().map(normalize_review).collect(),
        phone: details.national_phone_number,
        opening_hours: details.regular_opening_hours.map(|h| OpeningHours {
            open_now: h.open_now,
            weekday_descriptions: h.weekday_descriptions,
        }),
    }
}

fn normalize_review(review: ApiReview) -> Review {
    Review {
        text: review.text.map(|t| t.text).unwrap_or_default(),
        rating: review.rating.unwrap_or(0),
        author: review
            .author_attribution
            .and_then(|a| a.display_name)
            .unwrap_or_default(),
        relative_time: review.relative_publish_time_description.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SearchTextResponse;

    #[test]
    fn place_without_location_is_dropped() {
        let body = serde_json::json!({
            "places": [
                { "id": "a", "displayName": { "text": "Apollo" } },
                {
                    "id": "b",
                    "displayName": { "text": "MedPlus" },
                    "formattedAddress": "2 MG Road",
                    "location": { "latitude": 12.97, "longitude": 77.6 }
                }
            ]
        });
        let parsed: SearchTextResponse = serde_json::from_value(body).unwrap();
        let candidates: Vec<PlaceCandidate> =
            parsed.places.into_iter().filter_map(normalize_place).collect();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "MedPlus");
        assert_eq!(candidates[0].id.as_deref(), Some("b"));
        assert_eq!(candidates[0].address, "2 MG Road");
    }

    #[test]
    fn empty_id_becomes_none() {
        let body = serde_json::json!({
            "id": "",
            "location": { "latitude": 1.0, "longitude": 2.0 }
        });
        let place: ApiPlace = serde_json::from_value(body).unwrap();
        let candidate = normalize_place(place).unwrap();
        assert!(candidate.id.is_none());
        assert!(candidate.name.is_empty());
    }

    #[test]
    fn details_fill_defaults() {
        let body = serde_json::json!({
            "rating": 4.3,
            "reviews": [
                {
                    "rating": 5,
                    "text": { "text": "Very helpful staff" },
                    "authorAttribution": { "displayName": "Ravi" },
                    "relativePublishTimeDescription": "a month ago"
                },
                { "text": { "text": "no stars given" } }
            ],
            "regularOpeningHours": { "openNow": true }
        });
        let parsed: PlaceDetailsResponse = serde_json::from_value(body).unwrap();
        let details = normalize_details(parsed);

        assert_eq!(details.rating, Some(4.3));
        assert_eq!(details.user_ratings_total, 0);
        assert_eq!(details.reviews.len(), 2);
        assert_eq!(details.reviews[0].author, "Ravi");
        assert_eq!(details.reviews[0].relative_time, "a month ago");
        assert_eq!(details.reviews[1].rating, 0);
        assert!(details.phone.is_none());
        let hours = details.opening_hours.unwrap();
        assert_eq!(hours.open_now, Some(true));
        assert!(hours.weekday_descriptions.is_empty());
    }
}
