use lint2prompt_types::DiagnosticsData;

/// Pretty-printed JSON object keyed by file path.
pub fn render_json(data: &DiagnosticsData) -> serde_json::Result<String> {
    serde_json::to_string_pretty(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lint2prompt_types::{FileReport, Issue, Location, SeverityLabel};

    #[test]
    fn renders_empty_object() {
        assert_eq!(render_json(&DiagnosticsData::new()).expect("json"), "{}");
    }

    #[test]
    fn renders_issue_fields() {
        let mut data = DiagnosticsData::new();
        data.insert(FileReport {
            path: "/src/a.ts".into(),
            issues: vec![Issue {
                code: "E1".to_string(),
                severity: SeverityLabel::Warning,
                message: "bad".to_string(),
                locations: vec![Location {
                    lines: [3, 4],
                    context: "a\nb".to_string(),
                }],
            }],
        });

        insta::assert_snapshot!(render_json(&data).expect("json"), @r#"
        {
          "/src/a.ts": [
            {
              "code": "E1",
              "severity": "warning",
              "message": "bad",
              "locations": [
                {
                  "lines": [
                    3,
                    4
                  ],
                  "context": "a\nb"
                }
              ]
            }
          ]
        }
        "#);
    }
}
