use super::Role;

///
/// Identity of the signed in user together with the bearer token
/// used for both the REST api and the notification socket
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub seller_id: i64,
    pub role: Role,
    pub token: String,
}
