mod error;
pub use error::CoreError;

mod catalog;
pub use catalog::Catalog;

mod similarity;
pub use similarity::SimilarityMatrix;

mod recommend;
pub use recommend::{DEFAULT_TOP_N, content_movie_recommender};

pub mod evaluation;
pub use evaluation::{
  Attribute, RecommendationReport, popularity_rmse, vote_average_rmse, vote_count_rmse,
};

mod snapshot;
pub use snapshot::{SimilaritySnapshot, Snapshot, SnapshotError};

pub use movierec_shared::Movie;
