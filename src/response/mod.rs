mod stream;
mod user;

pub use stream::Stream;
pub use user::User;
