use axum::http::StatusCode;
use movierec_core::CoreError;
use movierec_shared::AppError;

/// Attach the HTTP status a core failure should be reported with.
pub fn core_error(err: CoreError) -> AppError {
  let status = match &err {
    CoreError::MovieNotFound { .. } => StatusCode::NOT_FOUND,
    CoreError::EmptyRecommendationSet { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    CoreError::MisalignedIdentifiers { .. }
    | CoreError::RowCountMismatch { .. }
    | CoreError::MalformedMatrix { .. } => StatusCode::INTERNAL_SERVER_ERROR,
  };
  AppError::with_status(status, err)
}
