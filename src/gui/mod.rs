mod app;
mod theme;

pub use app::PdfSearchApp;
