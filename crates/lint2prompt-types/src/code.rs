use serde_json::Value;

/// Display string used whenever a diagnostic carries no usable code.
pub const CODE_NOT_AVAILABLE: &str = "N/A";

/// Diagnostic code as it arrives from a diagnostic source.
///
/// Sources attach either nothing, a plain scalar, or a structured object whose `value`
/// member holds the actual code (often next to a documentation `target`). The shape is
/// resolved once, when the record enters the system, via [`DiagnosticCode::from_json`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    #[default]
    Absent,
    Scalar(String),
    WithValueField(String),
}

impl DiagnosticCode {
    pub fn scalar<S: Into<String>>(s: S) -> Self {
        DiagnosticCode::Scalar(s.into())
    }

    /// Resolve a raw JSON code value into the tagged variant.
    ///
    /// Total: every JSON shape maps to some variant. Falsy scalars (`false`, `0`) count as
    /// absent; a `value` member is kept verbatim, even when it stringifies to `""`.
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) | Some(Value::Bool(false)) => DiagnosticCode::Absent,
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => DiagnosticCode::Absent,
            Some(Value::Object(map)) => match map.get("value") {
                Some(inner) => DiagnosticCode::WithValueField(stringify(inner)),
                None => DiagnosticCode::Scalar(stringify(&Value::Object(map.clone()))),
            },
            Some(other) => DiagnosticCode::Scalar(stringify(other)),
        }
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}
