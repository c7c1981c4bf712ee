use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ReadUpdate {
    pub is_read: bool,
}
