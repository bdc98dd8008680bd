//! OpenAPI specification definition for the trivia API.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Questions
        crate::trivia::routes::questions::list_questions,
        crate::trivia::routes::questions::create_or_search_questions,
        crate::trivia::routes::questions::delete_question,
        // Categories
        crate::trivia::routes::categories::list_categories,
        crate::trivia::routes::categories::create_category,
        crate::trivia::routes::categories::questions_by_category,
        // Quizzes
        crate::trivia::routes::quizzes::play_quiz,
        // OpenAPI
        crate::trivia::routes::openapi::serve_openapi_json,
    ),
    components(schemas(
        crate::trivia::models::Question,
        crate::trivia::models::Category,
        crate::trivia::routes::questions::QuestionPayload,
        crate::trivia::routes::questions::QuestionPageResponse,
        crate::trivia::routes::questions::SearchResultsResponse,
        crate::trivia::routes::questions::CreateQuestionResponse,
        crate::trivia::routes::questions::DeleteQuestionResponse,
        crate::trivia::routes::categories::CreateCategoryRequest,
        crate::trivia::routes::categories::CategoryListResponse,
        crate::trivia::routes::categories::CreateCategoryResponse,
        crate::trivia::routes::categories::CategoryQuestionsResponse,
        crate::trivia::routes::quizzes::QuizRequest,
        crate::trivia::routes::quizzes::QuizCategory,
        crate::trivia::routes::quizzes::QuizResponse,
    )),
    tags(
        (name = "Questions", description = "Question CRUD and search"),
        (name = "Categories", description = "Category management"),
        (name = "Quizzes", description = "Quiz play"),
        (name = "OpenAPI", description = "OpenAPI specification"),
    ),
    info(
        title = "Trivia API",
        description = "REST API for trivia questions, categories, and quiz play",
        version = "1.0.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:8081", description = "Local development server")
    )
)]
pub struct ApiDoc;
