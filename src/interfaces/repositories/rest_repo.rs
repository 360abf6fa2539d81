use serde::Deserialize;
use uuid::Uuid;

use crate::db::rest::RestClient;

#[derive(Clone, Debug)]
pub struct SupabaseProjectRepo {
    pub client: RestClient,
}

#[derive(Clone, Debug)]
pub struct SupabaseContactMessageRepo {
    pub client: RestClient,
}

/// Projection used when only row identity matters (counts, deletes, pings).
#[derive(Debug, Deserialize)]
pub struct RowId {
    pub id: Uuid,
}
