//! Bounded request-body read.
//!
//! A CGI body stream has no end-of-body marker of its own: the script must
//! stop at exactly `CONTENT_LENGTH` bytes or it blocks on an open pipe.
//! [`read_declared`] is that stop, expressed as a read-exactly-N primitive
//! behind a gate.

use bytes::Bytes;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::env::CgiEnv;
use crate::error::Error;
use crate::method::Method;

/// Reads the request body the environment declares, if any.
///
/// Two gates, checked in order: the method must be `POST`, and the
/// declared `CONTENT_LENGTH` must be a positive integer. If either fails,
/// `Ok(None)` is returned and the reader is not touched.
///
/// Otherwise exactly the declared number of bytes is consumed, never
/// more. A stream that ends early is [`Error::BodyTruncated`].
pub async fn read_declared<R>(env: &CgiEnv, reader: &mut R) -> Result<Option<Bytes>, Error>
where
    R: AsyncRead + Unpin,
{
    if env.method() != Some(Method::Post) {
        return Ok(None);
    }
    let declared = env.content_length();
    if declared == 0 {
        return Ok(None);
    }

    let mut buf = vec![0u8; declared];
    reader.read_exact(&mut buf).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => Error::BodyTruncated { declared },
        _ => Error::Io(e),
    })?;
    Ok(Some(buf.into()))
}
