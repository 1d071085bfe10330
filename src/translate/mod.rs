pub mod interface;
pub mod client;
pub mod factory;

pub use interface::{TranslateRequest, TranslateResponse, Translator};
pub use client::RemoteTranslator;
pub use factory::TranslatorFactory;
