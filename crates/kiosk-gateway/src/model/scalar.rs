use serde::Deserialize;

/// A value that may arrive as a JSON number or as text (forms only carry text).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            Scalar::Text(text) => text.trim().parse().ok(),
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Scalar::Number(n) => n.to_string(),
            Scalar::Text(text) => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_and_text() {
        let n: Scalar = serde_json::from_str("30").unwrap();
        assert_eq!(n.as_f64(), Some(30.0));
        assert_eq!(n.into_text(), "30");

        let t: Scalar = serde_json::from_str("\" 2.5 \"").unwrap();
        assert_eq!(t.as_f64(), Some(2.5));

        let t: Scalar = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(t.as_f64(), None);
    }
}
