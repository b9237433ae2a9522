use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 一筆動物資料，所有欄位皆可缺漏
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimalRecord {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub locations: Option<Value>,
    #[serde(default)]
    pub characteristics: Option<Characteristics>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Characteristics {
    #[serde(default)]
    pub diet: Option<Value>,
    #[serde(default, rename = "type")]
    pub kind: Option<Value>,
    #[serde(default)]
    pub lifespan: Option<Value>,
    #[serde(default)]
    pub habitat: Option<Value>,
    #[serde(default)]
    pub slogan: Option<Value>,
    #[serde(default)]
    pub color: Option<Value>,
    #[serde(default)]
    pub top_speed: Option<Value>,
    #[serde(default)]
    pub temperament: Option<Value>,
}

/// One labeled line of an animal card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detail {
    pub label: &'static str,
    pub value: String,
}

/// 查詢結果：實際查詢的名稱（檔案來源為 None）與取得的資料
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lookup {
    pub query: Option<String>,
    pub animals: Vec<AnimalRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub html: String,
    pub animal_count: usize,
    pub found: bool,
}

/// Text for a JSON value, or `None` when the value is falsy
/// (null, false, zero, empty string, empty array or object).
pub fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) if items.is_empty() => None,
        Value::Object(map) if map.is_empty() => None,
        other => Some(other.to_string()),
    }
}

impl Characteristics {
    /// True when no known field was given at all.
    pub fn is_empty(&self) -> bool {
        *self == Characteristics::default()
    }
}

fn present(value: &Option<Value>) -> Option<String> {
    value.as_ref().and_then(display_text)
}

impl AnimalRecord {
    pub fn title(&self) -> String {
        present(&self.name).unwrap_or_default()
    }

    /// 只取第一個地點，其餘忽略
    pub fn first_location(&self) -> Option<String> {
        match &self.locations {
            Some(Value::Array(items)) => items.first().and_then(display_text),
            _ => None,
        }
    }

    /// 沒有 characteristics（缺少或空物件）時只顯示標題，連地點都不列出
    pub fn details(&self) -> Vec<Detail> {
        let c = match &self.characteristics {
            Some(c) if !c.is_empty() => c,
            _ => return Vec::new(),
        };

        let candidates = [
            ("Diet", present(&c.diet)),
            ("Type", present(&c.kind)),
            ("Location", self.first_location()),
            ("Life-span", present(&c.lifespan)),
            ("Habitat", present(&c.habitat)),
            ("Slogan", present(&c.slogan)),
            ("Color", present(&c.color)),
            ("Speed", present(&c.top_speed)),
            ("Temperament", present(&c.temperament)),
        ];

        candidates
            .into_iter()
            .filter_map(|(label, value)| value.map(|value| Detail { label, value }))
            .collect()
    }
}

impl Lookup {
    pub fn named(query: impl Into<String>, animals: Vec<AnimalRecord>) -> Self {
        Self {
            query: Some(query.into()),
            animals,
        }
    }

    pub fn unnamed(animals: Vec<AnimalRecord>) -> Self {
        Self {
            query: None,
            animals,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }
}
