use serde::{Deserialize, Serialize};
use serde_json::Number;

#[derive(Debug, Serialize, Deserialize)]
pub struct PriceResponse {
    pub platform: String,
    pub currency: String,
    pub price: Number,
}

impl PriceResponse {
    /// All endpoints quote in INR; `price` stays a raw JSON number so
    /// passthrough upstreams are echoed digit for digit.
    pub fn inr(platform: &str, price: Number) -> Self {
        Self {
            platform: platform.to_string(),
            currency: "INR".to_string(),
            price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn response_has_exactly_three_keys() {
        let response = PriceResponse::inr("Binance", Number::from_f64(5395000.0).unwrap());
        let value = serde_json::to_value(&response).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert!(object.contains_key("platform"));
        assert!(object.contains_key("currency"));
        assert!(object.contains_key("price"));
    }

    #[test]
    fn currency_is_always_inr() {
        let response = PriceResponse::inr("CoinGecko", Number::from(5500000u64));
        assert_eq!(response.currency, "INR");
    }

    #[test]
    fn integer_price_serializes_without_decimal_point() {
        let response = PriceResponse::inr("CoinGecko", Number::from(5500000u64));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({"platform": "CoinGecko", "currency": "INR", "price": 5500000})
        );
    }
}
