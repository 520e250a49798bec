use crate::application::http::{
    chatbot::router::ChatbotApiDoc,
    fruit::router::FruitApiDoc,
    health::handlers::get_health::__path_get_health,
    nlp::router::NlpApiDoc,
    recommendation::handlers::{
        get_fruits_for_disease::__path_get_fruits_for_disease,
        recommend_fruits::__path_recommend_fruits,
    },
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fruitopia API"
    ),
    paths(recommend_fruits, get_fruits_for_disease, get_health),
    nest(
        (path = "/chatbot", api = ChatbotApiDoc),
        (path = "/fruits", api = FruitApiDoc),
        (path = "/nlp", api = NlpApiDoc),
    )
)]
pub struct ApiDoc;
