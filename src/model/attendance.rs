use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the `attendance` table. Rows are written once and never
/// updated; removal is by full deletion keyed on `id`.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "employeeName": "Alice Example",
        "employeeID": "E-1024",
        "date": "2024-01-01",
        "status": "present"
    })
)]
pub struct AttendanceRecord {
    #[schema(example = 1)]
    pub id: u64,

    // Wire and column names keep the camelCase the table was created with.
    #[serde(rename = "employeeName")]
    #[sqlx(rename = "employeeName")]
    #[schema(example = "Alice Example")]
    pub employee_name: String,

    #[serde(rename = "employeeID")]
    #[sqlx(rename = "employeeID")]
    #[schema(example = "E-1024")]
    pub employee_id: String,

    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub date: NaiveDate,

    #[schema(example = "present")]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_with_wire_keys() {
        let record = AttendanceRecord {
            id: 7,
            employee_name: "Alice".to_string(),
            employee_id: "E1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            status: "present".to_string(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 7,
                "employeeName": "Alice",
                "employeeID": "E1",
                "date": "2024-01-01",
                "status": "present"
            })
        );
    }

    #[test]
    fn record_deserializes_from_wire_keys() {
        let record: AttendanceRecord = serde_json::from_value(serde_json::json!({
            "id": 3,
            "employeeName": "Bob",
            "employeeID": "42",
            "date": "2023-12-31",
            "status": "absent"
        }))
        .unwrap();

        assert_eq!(record.id, 3);
        assert_eq!(record.employee_name, "Bob");
        assert_eq!(record.employee_id, "42");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
        assert_eq!(record.status, "absent");
    }
}
