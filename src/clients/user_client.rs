use crate::clients::api_client::ApiClient;
use crate::framework::{ClientError, ResourceClient};
use crate::model::User;
use crate::user_resource::UserError;
use async_trait::async_trait;

/// Client for the user collection.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ApiClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: ClientError) -> Self::Error {
        UserError::Api(e)
    }
}
