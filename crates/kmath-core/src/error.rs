pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid color format, expected #RRGGBB or #AARRGGBB: {0}")]
    InvalidColorFormat(String),

    #[error("invalid rotation list size: {0}")]
    InvalidRotationListSize(usize),

    #[error("unknown easing: {0}")]
    EasingNotFound(String),
}
