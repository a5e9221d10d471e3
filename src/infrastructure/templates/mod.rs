mod locales;
mod template_parser;

pub use locales::SUPPORTED_LANGUAGES;
pub use template_parser::TemplateParser;
