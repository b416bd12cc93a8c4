#[derive(Debug)]
pub enum ApplicationError {
    BadRequest(String),
    PayloadTooLarge(String),
    StorageError(String),
    DatabaseError(String),
}
