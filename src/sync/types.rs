use serde::Serialize;

// Result/plan envelope types
#[derive(Serialize)]
pub struct FieldReport {
    pub metric: &'static str,
    pub value: Option<String>,
    pub applied: bool,
}

#[derive(Serialize)]
pub struct SyncReport {
    pub fields: Vec<FieldReport>,
    pub changed: bool,
    pub written: bool,
}
