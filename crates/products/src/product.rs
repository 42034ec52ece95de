use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use vpaygo_core::{is_truthy, DomainError, DomainResult, FieldValue};

/// Fields an ingestion payload must carry, all truthy.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "weight", "price", "image"];

/// A detected product sitting in the basket.
///
/// There is no identifier: position in the store is insertion order. Fields
/// hold whatever JSON the producer sent; only presence is checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: FieldValue,
    pub weight: FieldValue,
    pub price: FieldValue,
    /// Image filename, resolved by the client against its assets directory.
    pub image: FieldValue,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl Product {
    /// Build an unstamped record (the form a producer sends).
    pub fn new(
        name: impl Into<FieldValue>,
        weight: impl Into<FieldValue>,
        price: impl Into<FieldValue>,
        image: impl Into<FieldValue>,
    ) -> Self {
        Self {
            name: name.into(),
            weight: weight.into(),
            price: price.into(),
            image: image.into(),
            timestamp: None,
        }
    }

    /// Validate a raw ingestion payload and stamp it with `received_at`.
    ///
    /// Every field in [`REQUIRED_FIELDS`] must be present and truthy; their
    /// JSON types are not checked. Extra fields are ignored.
    pub fn from_payload(payload: &Value, received_at: DateTime<Utc>) -> DomainResult<Self> {
        let Value::Object(fields) = payload else {
            return Err(DomainError::validation("payload must be a JSON object"));
        };

        for field in REQUIRED_FIELDS {
            if !is_truthy(fields.get(field)) {
                return Err(DomainError::missing_field(field));
            }
        }

        let field = |name: &str| FieldValue::from_json(fields.get(name).cloned().unwrap_or(Value::Null));

        Ok(Self {
            name: field("name"),
            weight: field("weight"),
            price: field("price"),
            image: field("image"),
            timestamp: Some(received_at.timestamp_millis()),
        })
    }

    /// Creation time, when the record was stamped.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp.and_then(DateTime::from_timestamp_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn valid_payload_is_stamped() {
        let payload = json!({"name": "Apple", "weight": 1, "price": 2, "image": "apple.png"});
        let product = Product::from_payload(&payload, test_time()).unwrap();

        assert_eq!(product.name, "Apple");
        assert_eq!(product.weight, FieldValue::from(1));
        assert_eq!(product.price, FieldValue::from(2));
        assert_eq!(product.image, "apple.png");
        assert_eq!(product.timestamp, Some(test_time().timestamp_millis()));
        assert_eq!(product.created_at(), Some(test_time()));
    }

    #[test]
    fn string_measures_are_kept_verbatim() {
        let payload = json!({"name": "Rice", "weight": "500g", "price": "3.20", "image": "rice.png"});
        let product = Product::from_payload(&payload, test_time()).unwrap();
        assert_eq!(product.weight, FieldValue::from("500g"));
        assert_eq!(product.price, FieldValue::from("3.20"));
    }

    #[test]
    fn missing_fields_are_rejected() {
        let payload = json!({"name": "Apple"});
        let err = Product::from_payload(&payload, test_time()).unwrap_err();
        assert_eq!(err, DomainError::missing_field("weight"));
    }

    #[test]
    fn zero_weight_counts_as_missing() {
        let payload = json!({"name": "Apple", "weight": 0, "price": 2, "image": "apple.png"});
        let err = Product::from_payload(&payload, test_time()).unwrap_err();
        assert_eq!(err, DomainError::missing_field("weight"));
    }

    #[test]
    fn empty_image_counts_as_missing() {
        let payload = json!({"name": "Apple", "weight": 1, "price": 2, "image": ""});
        assert!(Product::from_payload(&payload, test_time()).is_err());
    }

    #[test]
    fn truthy_values_of_any_type_are_accepted() {
        let payloads = [
            json!({"name": 42, "weight": 1, "price": 2, "image": "apple.png"}),
            json!({"name": "Apple", "weight": true, "price": 2, "image": "apple.png"}),
            json!({"name": "Apple", "weight": 1, "price": {"amount": 2}, "image": "apple.png"}),
            json!({"name": "Apple", "weight": 1, "price": 2, "image": ["a.png"]}),
        ];

        for payload in payloads {
            let product = Product::from_payload(&payload, test_time()).unwrap();
            let mut echoed = serde_json::to_value(&product).unwrap();
            echoed.as_object_mut().unwrap().remove("timestamp");
            assert_eq!(echoed, payload);
        }
    }

    #[test]
    fn non_object_payload_is_rejected() {
        assert!(Product::from_payload(&json!(["Apple", 1, 2, "apple.png"]), test_time()).is_err());
        assert!(Product::from_payload(&json!("Apple"), test_time()).is_err());
        assert!(Product::from_payload(&json!(null), test_time()).is_err());
    }

    #[test]
    fn unstamped_record_omits_timestamp_on_the_wire() {
        let product = Product::new("Apple", 1, 2, "apple.png");
        assert_eq!(
            serde_json::to_value(&product).unwrap(),
            json!({"name": "Apple", "weight": 1, "price": 2, "image": "apple.png"})
        );
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: any payload with all four fields truthy is accepted unchanged.
            #[test]
            fn truthy_payloads_are_accepted(
                name in "[A-Za-z][A-Za-z0-9 ]{0,30}",
                weight in 1i64..10_000,
                price in "[1-9][0-9]{0,4}(\\.[0-9]{2})?",
                image in "[a-z]{1,12}\\.png",
            ) {
                let payload = json!({"name": name, "weight": weight, "price": price, "image": image});
                let product = Product::from_payload(&payload, test_time()).unwrap();
                prop_assert_eq!(product.name, name);
                prop_assert_eq!(product.weight, FieldValue::from(weight));
                prop_assert_eq!(product.price, FieldValue::Text(price));
                prop_assert_eq!(product.image, image);
            }

            /// Property: removing any one required field is always rejected.
            #[test]
            fn dropping_a_required_field_is_rejected(index in 0usize..4) {
                let mut payload = json!({"name": "Apple", "weight": 1, "price": 2, "image": "apple.png"});
                if let Value::Object(map) = &mut payload {
                    map.remove(REQUIRED_FIELDS[index]);
                }
                prop_assert_eq!(
                    Product::from_payload(&payload, test_time()),
                    Err(DomainError::missing_field(REQUIRED_FIELDS[index]))
                );
            }
        }
    }
}
