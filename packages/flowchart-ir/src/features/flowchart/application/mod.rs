mod convert_source;

pub use convert_source::ConvertSourceUseCase;
