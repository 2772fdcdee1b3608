use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, ReadContentError>;

/// Read the UTF-8 text of the GraphQL file at `file_path`.
pub fn read_content<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let file_path = file_path.as_ref();
    let io_error = |err| ReadContentError::Io {
        err,
        file_path: file_path.to_path_buf(),
    };

    let metadata = std::fs::metadata(file_path).map_err(io_error)?;
    if !metadata.is_file() {
        return Err(ReadContentError::NotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path).map_err(io_error)?;
    let content = String::from_utf8(bytes).map_err(|err| ReadContentError::NotUtf8 {
        file_path: file_path.to_path_buf(),
        valid_up_to: err.utf8_error().valid_up_to(),
    })?;

    log::trace!("read {} bytes from `{}`", content.len(), file_path.display());
    Ok(content)
}

#[derive(Debug, Error)]
pub enum ReadContentError {
    #[error("Failed to read `{}`: {err}", .file_path.display())]
    Io {
        #[source]
        err: std::io::Error,
        file_path: PathBuf,
    },

    #[error("`{}` is not a file", .0.display())]
    NotAFile(PathBuf),

    #[error(
        "`{}` is not valid utf8 past byte offset {valid_up_to}",
        .file_path.display(),
    )]
    NotUtf8 {
        file_path: PathBuf,
        valid_up_to: usize,
    },
}
