use serde::{Deserialize, Serialize};

/// One match from `GET /api/drugs/search?q=`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugSearchHit {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub selling_price: f64,
}

/// Response body of the search endpoint (the server caps it at 10 hits)
pub type DrugSearchResponse = Vec<DrugSearchHit>;
