use serde_json::Value;

/// Render the final report exactly as it goes to the terminal.
pub fn render_listings(jobs: &[Value]) -> String {
    if jobs.is_empty() {
        return "No job listings found.\n".to_string();
    }
    let json = serde_json::to_string_pretty(jobs).expect("listings serialize back to JSON");
    format!("\nFound job listings:\n{}\n", json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_sequence_prints_only_the_no_listings_line() {
        assert_eq!(render_listings(&[]), "No job listings found.\n");
    }

    #[test]
    fn listings_render_as_header_plus_parseable_json() {
        let listing = json!({
            "position": "Data Engineer",
            "location": "NYC",
            "link": "https://example.com/jobs/de-2",
            "remote": false
        });
        let out = render_listings(std::slice::from_ref(&listing));

        let mut lines = out.lines();
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("Found job listings:"));

        let json_part = out.split_once("Found job listings:\n").unwrap().1;
        let parsed: Vec<Value> = serde_json::from_str(json_part).unwrap();
        assert_eq!(parsed, vec![listing]);
    }

    #[test]
    fn json_is_two_space_indented() {
        let out = render_listings(&[json!({"position": "QA"})]);
        assert!(out.contains("\n  {\n    \"position\": \"QA\"\n  }\n"));
    }
}
