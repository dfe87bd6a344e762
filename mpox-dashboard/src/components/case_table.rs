use crate::models::RegionCaseCount;
use crate::theme::TABLE_STYLE;
use dioxus::prelude::*;

pub const CASE_TABLE_HEADERS: [&str; 2] = ["Estado", "Casos"];

/// Cell text for each table row, in dataset order.
pub fn case_table_cells(rows: &[RegionCaseCount]) -> Vec<[String; 2]> {
    rows.iter()
        .map(|r| [r.region.clone(), r.case_count.to_string()])
        .collect()
}

#[component]
pub fn CaseTable(rows: Vec<RegionCaseCount>) -> Element {
    let cells = case_table_cells(&rows);

    rsx! {
        table { style: TABLE_STYLE,
            thead {
                tr {
                    for header in CASE_TABLE_HEADERS {
                        th { "{header}" }
                    }
                }
            }
            tbody {
                for [region, cases] in cells {
                    tr { key: "{region}",
                        td { "{region}" }
                        td { "{cases}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::get_fallback_cases;

    #[test]
    fn test_table_has_two_columns() {
        assert_eq!(CASE_TABLE_HEADERS, ["Estado", "Casos"]);
        for row in case_table_cells(&get_fallback_cases()) {
            assert_eq!(row.len(), CASE_TABLE_HEADERS.len());
        }
    }

    #[test]
    fn test_cells_follow_dataset_order() {
        let cells = case_table_cells(&get_fallback_cases());
        let expected: Vec<[String; 2]> = [("SP", "43"), ("RJ", "9"), ("MG", "3"), ("RS", "1")]
            .iter()
            .map(|(r, c)| [r.to_string(), c.to_string()])
            .collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn test_no_rows_no_cells() {
        assert!(case_table_cells(&[]).is_empty());
    }
}
