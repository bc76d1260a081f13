//! Tests for object mapping and data tables.

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use crate::errors::Error;
    use crate::mapping::{map_all, map_to, property_dictionary, DataTable};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Customer {
        id: i32,
        name: String,
        email: Option<String>,
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct CustomerSummary {
        id: i32,
        name: String,
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct CustomerCard {
        name: String,
        #[serde(default)]
        loyalty_points: u32,
    }

    fn customers() -> Vec<Customer> {
        vec![
            Customer {
                id: 1,
                name: "Ayşe".to_string(),
                email: Some("ayse@example.com".to_string()),
            },
            Customer {
                id: 2,
                name: "Mehmet".to_string(),
                email: None,
            },
        ]
    }

    // ==================== property_dictionary ====================

    #[test]
    fn test_property_dictionary_keeps_field_order() {
        let dictionary = property_dictionary(&customers()[0]).unwrap();
        let keys: Vec<&str> = dictionary.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", "name", "email"]);
        assert_eq!(dictionary["name"], json!("Ayşe"));
    }

    #[test]
    fn test_property_dictionary_rejects_non_objects() {
        assert!(matches!(
            property_dictionary(&42),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            property_dictionary(&vec![1, 2]),
            Err(Error::InvalidInput(_))
        ));
    }

    // ==================== map_to ====================

    #[test]
    fn test_map_to_drops_extra_fields() {
        let summary: CustomerSummary = map_to(&customers()[0]).unwrap();
        assert_eq!(
            summary,
            CustomerSummary {
                id: 1,
                name: "Ayşe".to_string()
            }
        );
    }

    #[test]
    fn test_map_to_uses_target_defaults() {
        let card: CustomerCard = map_to(&customers()[1]).unwrap();
        assert_eq!(card.name, "Mehmet");
        assert_eq!(card.loyalty_points, 0);
    }

    #[test]
    fn test_map_to_fails_on_missing_required_field() {
        let result: crate::errors::Result<Customer> = map_to(&json!({ "id": 3 }));
        assert!(matches!(result, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_map_all() {
        let summaries: Vec<CustomerSummary> = map_all(&customers()).unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[1].name, "Mehmet");
    }

    // ==================== DataTable ====================

    #[test]
    fn test_data_table_from_items() {
        let table = DataTable::from_items("Customers", &customers()).unwrap();
        assert_eq!(table.name, "Customers");
        assert_eq!(table.columns, vec!["id", "name", "email"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(0, "EMAIL"), Some(&json!("ayse@example.com")));
        assert_eq!(table.cell(1, "email"), Some(&json!(null)));
        assert_eq!(table.cell(2, "id"), None);
        assert_eq!(table.cell(0, "phone"), None);
    }

    #[test]
    fn test_data_table_round_trips_to_list() {
        let table = DataTable::from_items("Customers", &customers()).unwrap();
        let restored: Vec<Customer> = table.to_list().unwrap();
        assert_eq!(restored, customers());

        let cards: Vec<CustomerCard> = table.to_list().unwrap();
        assert_eq!(cards[0].name, "Ayşe");
    }

    #[test]
    fn test_data_table_empty_and_mixed_shapes() {
        let empty = DataTable::from_items::<Customer>("Empty", &[]).unwrap();
        assert!(empty.columns.is_empty());
        assert_eq!(empty.row_count(), 0);

        let rows = vec![json!({ "a": 1 }), json!({ "b": 2, "a": 3 })];
        let table = DataTable::from_items("Mixed", &rows).unwrap();
        assert_eq!(table.columns, vec!["a", "b"]);
        assert_eq!(table.rows[0], vec![json!(1), json!(null)]);
        assert_eq!(table.rows[1], vec![json!(3), json!(2)]);
    }

    #[test]
    fn test_data_table_rejects_scalar_items() {
        assert!(matches!(
            DataTable::from_items("Numbers", &[1, 2, 3]),
            Err(Error::InvalidInput(_))
        ));
    }
}
