//! Product identifier parsing helpers.

use salvo::prelude::StatusError;
use uuid::Uuid;

use petstore_app::domain::products::models::ProductUuid;

/// Parse a client-supplied product identifier.
///
/// An identifier that is not a UUID cannot name any product, so it maps to
/// the same not-found error as an unknown one.
pub(crate) trait ProductIdExt {
    fn into_product_uuid(self) -> Result<ProductUuid, StatusError>;
}

impl ProductIdExt for String {
    fn into_product_uuid(self) -> Result<ProductUuid, StatusError> {
        match self.parse::<Uuid>() {
            Ok(uuid) => Ok(ProductUuid::from_uuid(uuid)),
            Err(_) => Err(StatusError::not_found().brief("Product not found")),
        }
    }
}
