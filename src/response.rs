//! A lightweight response container whose body can be buffered and re-read.
//!
//! The HTTP client layer hands over responses whose body is a one-shot
//! stream. Interceptors that need to inspect the body without consuming it
//! call [`Response::buffer_body`], which swaps the stream for an in-memory
//! cursor over the same bytes.

use std::io::{Cursor, Read};

use crate::error::Result;

/// An HTTP response with a replaceable body stream.
pub struct Response {
    status: u16,
    headers: Vec<(String, String)>,
    body: Option<Box<dyn Read + Send>>,
}

impl Response {
    pub fn new(status: u16, headers: Vec<(String, String)>) -> Self {
        Self {
            status,
            headers,
            body: None,
        }
    }

    pub fn with_body(mut self, body: impl Read + Send + 'static) -> Self {
        self.body = Some(Box::new(body));
        self
    }

    /// Buffer a client response into a replayable one. The body is fully
    /// read into memory here; the network connection is released back to
    /// the client once this returns.
    pub async fn from_reqwest(response: reqwest::Response) -> Result<Self> {
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let bytes = response.bytes().await?;

        Ok(Self::new(status, headers).with_body(Cursor::new(bytes.to_vec())))
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Case-insensitive header lookup, first match wins.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header, _)| header.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Take the body stream out of the response, leaving `None` behind.
    pub fn take_body(&mut self) -> Option<Box<dyn Read + Send>> {
        self.body.take()
    }

    /// Fully read the body into memory, replace the stream with an
    /// in-memory cursor over the same bytes, and return a copy of them.
    ///
    /// The original stream is always dropped, even when reading fails.
    /// A read failure is logged at error level and yields `None`; the
    /// response is left without a body in that case.
    pub fn buffer_body(&mut self) -> Option<Vec<u8>> {
        let mut stream = self.body.take()?;
        let mut data = Vec::new();
        match stream.read_to_end(&mut data) {
            Ok(_) => {
                self.body = Some(Box::new(Cursor::new(data.clone())));
                Some(data)
            }
            Err(error) => {
                tracing::error!(%error, "error consuming response body");
                None
            }
        }
    }
}

impl std::fmt::Debug for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .field("body", &self.body.as_ref().map(|_| "<stream>"))
            .finish()
    }
}

/// Read a stream's full text contents. The stream is taken by value and
/// dropped on every path, so the underlying resource is always closed.
pub fn read_to_string_and_close(mut input: impl Read) -> std::io::Result<String> {
    let mut contents = String::new();
    input.read_to_string(&mut contents)?;
    Ok(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"))
        }
    }

    #[test]
    fn buffer_body_returns_bytes_and_allows_reread() {
        let payload = b"hello response body".to_vec();
        let mut response =
            Response::new(200, vec![]).with_body(Cursor::new(payload.clone()));

        let buffered = response.buffer_body().unwrap();
        assert_eq!(buffered, payload);

        // The replacement stream replays the same bytes.
        let mut replay = Vec::new();
        response
            .take_body()
            .unwrap()
            .read_to_end(&mut replay)
            .unwrap();
        assert_eq!(replay, payload);
    }

    #[test]
    fn buffer_body_without_body_is_none() {
        let mut response = Response::new(204, vec![]);
        assert!(response.buffer_body().is_none());
    }

    #[test]
    fn buffer_body_read_failure_is_swallowed() {
        let mut response = Response::new(200, vec![]).with_body(FailingReader);
        assert!(response.buffer_body().is_none());
        // The broken stream was discarded, not put back.
        assert!(response.take_body().is_none());
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let response = Response::new(
            200,
            vec![("Content-Type".to_string(), "text/plain".to_string())],
        );
        assert_eq!(response.header("content-type"), Some("text/plain"));
        assert_eq!(response.header("x-missing"), None);
    }

    #[test]
    fn read_to_string_and_close_reads_everything() {
        let text = read_to_string_and_close(Cursor::new("line one\nline two")).unwrap();
        assert_eq!(text, "line one\nline two");
    }

    #[test]
    fn read_to_string_and_close_propagates_errors() {
        assert!(read_to_string_and_close(FailingReader).is_err());
    }
}
