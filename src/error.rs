use crate::refs::RefType;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum CardError {
    #[error(transparent)]
    /// An I/O error occurred, usually while writing the finished document
    Io(#[from] std::io::Error),

    #[error("can't encode the payload as a QR code: {0}")]
    /// [qrcode] couldn't fit the payload into any QR code version
    QrCode(#[from] qrcode::types::QrError),

    #[error("PDF object {0:?} was referenced before it was written")]
    /// A page referenced a PDF object that was never generated
    UnresolvedReference(RefType),
}
