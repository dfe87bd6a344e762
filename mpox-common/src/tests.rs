#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_region_uses_interchange_field_names() {
        let row = RegionCaseCount::new("SP", 43);
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value, serde_json::json!({ "estado": "SP", "casos": 43 }));

        let parsed: RegionCaseCount =
            serde_json::from_str(r#"{"estado":"RJ","casos":9}"#).unwrap();
        assert_eq!(parsed, RegionCaseCount::new("RJ", 9));
    }

    #[test]
    fn test_envelope_ignores_payload_fields() {
        let body = r#"{
            "help": "https://opendatasus.saude.gov.br/api/3/action/help_show?name=package_search",
            "success": true,
            "result": { "count": 2, "results": [{ "name": "mpox" }] }
        }"#;
        let envelope: PackageSearchResponse = serde_json::from_str(body).unwrap();
        assert!(envelope.success);
    }

    #[test]
    fn test_envelope_requires_success_flag() {
        let result = serde_json::from_str::<PackageSearchResponse>(r#"{"result": {}}"#);
        assert!(result.is_err());

        let result = serde_json::from_str::<PackageSearchResponse>(r#"{"success": "yes"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_total_cases() {
        assert_eq!(total_cases(&[]), 0);

        let rows = vec![
            RegionCaseCount::new("SP", 43),
            RegionCaseCount::new("RJ", 9),
            RegionCaseCount::new("MG", 3),
            RegionCaseCount::new("RS", 1),
        ];
        assert_eq!(total_cases(&rows), 56);
    }

    #[test]
    fn test_total_cases_does_not_overflow() {
        let rows = vec![
            RegionCaseCount::new("AA", u32::MAX),
            RegionCaseCount::new("BB", u32::MAX),
        ];
        assert_eq!(total_cases(&rows), 2 * u64::from(u32::MAX));
    }
}
