use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Scan-timing configuration. The backend owns the shape; it is edited and
/// posted back as-is.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct ScanConfig(pub Map<String, Value>);

impl ScanConfig {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Store `raw` under `key`. Text that parses as JSON keeps its JSON type.
    pub fn set_from_text(&mut self, key: &str, raw: &str) {
        let value = serde_json::from_str::<Value>(raw.trim())
            .unwrap_or_else(|_| Value::String(raw.to_string()));
        self.0.insert(key.to_string(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_from_text_keeps_json_types() {
        let mut config = ScanConfig::default();
        config.set_from_text("tempoScan", "30");
        config.set_from_text("ativo", "true");
        config.set_from_text("horario", "08:00");
        assert_eq!(config.get("tempoScan"), Some(&json!(30)));
        assert_eq!(config.get("ativo"), Some(&json!(true)));
        assert_eq!(config.get("horario"), Some(&json!("08:00")));
    }

    #[test]
    fn config_round_trips_as_plain_object() {
        let raw = json!({"tempoScan": 15, "extra": {"a": 1}});
        let config: ScanConfig = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&config).unwrap(), raw);
    }

    #[test]
    fn config_keeps_backend_key_order() {
        let raw = r#"{"tempoScan":15,"ativo":true,"horarioInicio":"08:00"}"#;
        let mut config: ScanConfig = serde_json::from_str(raw).unwrap();
        config.set_from_text("tempoScan", "30");
        assert_eq!(
            serde_json::to_string(&config).unwrap(),
            r#"{"tempoScan":30,"ativo":true,"horarioInicio":"08:00"}"#
        );
    }
}
