use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

/// Product entity, stored as one item keyed by `productID`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Price (no currency or precision constraints)
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
    /// Whether the product can be ordered
    pub available: bool,
    /// Server-assigned identifier (UUID v4)
    #[serde(rename = "productID")]
    #[schema(example = "7d0c5e8e-3a4f-4c3e-9f0a-0b6c1e2d3f4a")]
    pub product_id: String,
}

/// Largest magnitude an f64 holds with every integer below it exact
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Whole prices go on the wire as integers, so `12` echoes as `12`, not `12.0`.
fn serialize_price<S>(price: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if price.fract() == 0.0 && price.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

/// Validated request payload for create and update, built from the cast
/// fields of the request body.
///
/// Any `productID` in the request body is ignored; the identifier always
/// comes from the server (create) or the path (update).
#[derive(Debug, Clone, PartialEq, ToSchema)]
pub struct ProductInput {
    #[schema(example = "Widget")]
    pub name: String,
    #[schema(example = "A very useful widget")]
    pub description: String,
    #[schema(example = 9.99)]
    pub price: f64,
    pub available: bool,
}

impl ProductInput {
    /// Full item: validated fields plus the given identifier
    pub fn into_product(self, product_id: String) -> Product {
        Product {
            name: self.name,
            description: self.description,
            price: self.price,
            available: self.available,
            product_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_serializes_with_product_id_key() {
        let product = ProductInput {
            name: "Widget".into(),
            description: "Useful".into(),
            price: 9.5,
            available: true,
        }
        .into_product("abc".into());

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Widget",
                "description": "Useful",
                "price": 9.5,
                "available": true,
                "productID": "abc"
            })
        );
    }

    #[test]
    fn test_whole_price_serializes_as_integer() {
        let product = ProductInput {
            name: "Widget".into(),
            description: "Useful".into(),
            price: 12.0,
            available: false,
        }
        .into_product("abc".into());

        let text = serde_json::to_string(&product).unwrap();
        assert!(text.contains(r#""price":12,"#), "{text}");

        let back: Product = serde_json::from_str(&text).unwrap();
        assert_eq!(back.price, 12.0);
    }

    #[test]
    fn test_fractional_and_huge_prices_stay_floats() {
        let mut product = ProductInput {
            name: "Widget".into(),
            description: "Useful".into(),
            price: 0.1,
            available: false,
        }
        .into_product("abc".into());
        assert_eq!(serde_json::to_value(&product).unwrap()["price"], json!(0.1));

        product.price = 1e300;
        assert_eq!(serde_json::to_value(&product).unwrap()["price"], json!(1e300));
    }
}
