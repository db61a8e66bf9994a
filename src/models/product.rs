use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Product identifier as sent by the backend; numeric in practice, text tolerated.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl ProductId {
    /// Parse user input, preferring the numeric form.
    pub fn parse(raw: &str) -> Self {
        let t = raw.trim();
        match t.parse::<i64>() {
            Ok(n) => ProductId::Number(n),
            Err(_) => ProductId::Text(t.to_string()),
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

/// A product record owned by the backend.
///
/// Only the name and the selection flag are interpreted locally; every other
/// field is carried in `attributes` so the record is posted back unchanged.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Product {
    pub id: ProductId,
    #[serde(rename = "nome", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "selecionado", default, deserialize_with = "null_as_default")]
    pub selected: bool,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            selected: false,
            attributes: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_keeps_unknown_fields() {
        let raw = json!({"id": 7, "nome": "Arroz", "precoPromocional": 9.9, "setor": "MERCEARIA"});
        let product: Product = serde_json::from_value(raw).unwrap();
        assert_eq!(product.id, ProductId::Number(7));
        assert!(!product.selected);
        assert_eq!(product.attributes.get("setor"), Some(&json!("MERCEARIA")));

        let back = serde_json::to_value(&product).unwrap();
        assert_eq!(back["precoPromocional"], json!(9.9));
        assert_eq!(back["selecionado"], json!(false));
    }

    #[test]
    fn null_name_and_flag_decode_as_defaults() {
        let raw = json!([
            {"id": 1, "nome": "Arroz", "selecionado": null},
            {"id": 2, "nome": null}
        ]);
        let products: Vec<Product> = serde_json::from_value(raw).unwrap();
        assert_eq!(products.len(), 2);
        assert!(!products[0].selected);
        assert_eq!(products[0].name, "Arroz");
        assert_eq!(products[1].name, "");
        assert!(products[1].attributes.is_empty());
    }

    #[test]
    fn product_id_parse_prefers_numbers() {
        assert_eq!(ProductId::parse(" 42 "), ProductId::Number(42));
        assert_eq!(ProductId::parse("SKU-1"), ProductId::Text("SKU-1".into()));
        assert_eq!(ProductId::parse("SKU-1").to_string(), "SKU-1");
    }
}
