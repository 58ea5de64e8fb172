use std::ops::Deref;

use crate::{
    User,
    repository::{self, FindType},
};

#[derive(Clone)]
pub struct Query(pub nutriplan_shared::State);

impl Deref for Query {
    type Target = nutriplan_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Query {
    pub async fn find(&self, id: impl Into<String>) -> nutriplan_shared::Result<Option<User>> {
        let row = repository::find(&self.read_db, FindType::Id(id.into())).await?;

        Ok(row.map(User::from))
    }

    pub async fn find_by_email(
        &self,
        email: impl AsRef<str>,
    ) -> nutriplan_shared::Result<Option<User>> {
        let email = crate::root::normalize_email(email.as_ref());
        let row = repository::find(&self.read_db, FindType::Email(email)).await?;

        Ok(row.map(User::from))
    }

    pub async fn exists(&self, id: impl Into<String>) -> nutriplan_shared::Result<bool> {
        repository::exists(&self.read_db, id).await
    }
}
