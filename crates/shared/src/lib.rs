mod error;
pub use error::AppError;

mod env;
pub use env::APP_ENV;

mod movie;
pub use movie::Movie;
