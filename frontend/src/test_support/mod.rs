#[cfg(not(target_arch = "wasm32"))]
pub mod ssr;

pub mod helpers {
    use crate::api::{Id, SessionIdentity};
    use serde_json::{json, Value};

    pub fn identity(admin: bool) -> SessionIdentity {
        SessionIdentity {
            token: "eyJhbGciOiJIUzUxMiJ9".into(),
            token_type: "Bearer".into(),
            id: Id::new(1),
            username: "yoga@studio.com".into(),
            first_name: "Admin".into(),
            last_name: "Admin".into(),
            admin,
        }
    }

    pub fn session_json(id: u64, users: &[u64]) -> Value {
        json!({
            "id": id,
            "name": "Yoga",
            "date": "2025-07-27T00:00:00.000+00:00",
            "teacher_id": 1,
            "description": "Yoga",
            "users": users,
            "createdAt": "2025-07-26T15:39:03",
            "updatedAt": "2025-07-26T15:39:03"
        })
    }

    pub fn teacher_json(id: u64) -> Value {
        json!({
            "id": id,
            "firstName": "John",
            "lastName": "Doe",
            "createdAt": "2025-07-01T10:00:00",
            "updatedAt": "2025-07-01T10:00:00"
        })
    }

    pub fn user_json(id: u64, admin: bool) -> Value {
        json!({
            "id": id,
            "email": "yoga@studio.com",
            "firstName": "Kim",
            "lastName": "Gordon",
            "admin": admin,
            "createdAt": "2025-07-01T10:00:00",
            "updatedAt": "2025-07-02T10:00:00"
        })
    }
}
