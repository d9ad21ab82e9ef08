//! [`ApiEntity`] implementation for [`User`].

use crate::framework::ApiEntity;
use crate::model::User;

impl ApiEntity for User {
    type Id = u64;
    const COLLECTION: &'static str = "users";

    fn id(&self) -> u64 {
        self.id
    }
}
