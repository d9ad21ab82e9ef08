//! [`ApiEntity`] implementation for [`Product`].

use crate::framework::ApiEntity;
use crate::model::Product;

impl ApiEntity for Product {
    type Id = u64;
    const COLLECTION: &'static str = "products";

    fn id(&self) -> u64 {
        self.id
    }
}
