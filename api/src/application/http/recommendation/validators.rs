use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecommendFruitsValidator {
    #[validate(length(min = 1, max = 200, message = "disease must be 1 to 200 characters"))]
    pub disease: String,
}
