use docbench_core::{ConnectionError, StoreError};

pub fn store_error(err: mongodb::error::Error) -> StoreError {
    match *err.kind {
        mongodb::error::ErrorKind::BsonDeserialization(ref e) => StoreError::Decode(e.to_string()),
        _ => StoreError::backend(err),
    }
}

pub fn connection_error(endpoint: &str, err: mongodb::error::Error) -> ConnectionError {
    match *err.kind {
        mongodb::error::ErrorKind::InvalidArgument { ref message, .. } => {
            ConnectionError::InvalidEndpoint { endpoint: endpoint.to_string(), reason: message.clone() }
        }
        _ => ConnectionError::unreachable(endpoint, err),
    }
}
