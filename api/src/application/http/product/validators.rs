use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

#[derive(Debug, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetProductParams {
    /// Case-insensitive fragment of the product name, used verbatim.
    #[serde(default)]
    pub query: String,
}
