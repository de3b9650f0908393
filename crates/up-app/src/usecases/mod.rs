pub mod capture_paste;
pub mod decode_token;
pub mod encode_text;

pub use capture_paste::CapturePasteUseCase;
pub use decode_token::DecodeTokenUseCase;
pub use encode_text::EncodeTextUseCase;
