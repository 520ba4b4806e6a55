use crate::api::attendance::CreateAttendance;
use crate::model::attendance::AttendanceRecord;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Attendance Tracker API",
        version = "1.0.0",
        description = r#"
## Attendance Tracker

This API records, lists, and deletes employee attendance entries.

### 🔹 Key Features
- **Record Attendance**
  - Submit one attendance entry per employee and date
- **Attendance History**
  - List every recorded entry, newest date first
- **Record Removal**
  - Delete an entry by its id
- **Health**
  - Round-trip the database to report connectivity

### 📦 Response Format
- JSON-based RESTful responses

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::attendance::create_attendance,
        crate::api::attendance::list_attendance,
        crate::api::attendance::delete_attendance,

        crate::api::health::health,
    ),
    components(
        schemas(
            AttendanceRecord,
            CreateAttendance
        )
    ),
    tags(
        (name = "Attendance", description = "Attendance record APIs"),
        (name = "Health", description = "Service health APIs"),
    )
)]
pub struct ApiDoc;
