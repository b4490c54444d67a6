use thiserror::Error;

#[derive(Error, Debug)]
pub enum RasterError {
    #[error("Cannot encode an empty {0}x{1} image")]
    EmptyImage(u32, u32),
    #[error("PNG encoding failed")]
    Encode(#[from] image::ImageError),
    #[error(transparent)]
    IO(#[from] std::io::Error),
}
