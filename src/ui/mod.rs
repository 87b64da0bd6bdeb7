// Desktop front end

pub mod app;

pub use app::create_app;
